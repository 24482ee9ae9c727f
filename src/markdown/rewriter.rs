//! HTML rendering with docset-specific image and heading output.
//!
//! Every event goes through pulldown-cmark's HTML writer except two kinds:
//! images are emitted as a flat `<img>` tag, and headings get a Dash anchor
//! plus an `id` attribute.

use pulldown_cmark::escape::{escape_href, escape_html};
use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, html};

use super::Document;
use super::image_attributes::ImageAttributes;
use super::slug::SlugRegistry;

/// Prefix of the anchor name docset browsers use to build a page outline.
pub const DASH_ANCHOR_PREFIX: &str = "//apple_ref/cpp/Entry/";

/// Path segment removed from local image destinations.
const IMAGE_DIR_SEGMENT: &str = "img";

/// Renders a parsed document to an HTML fragment.
pub fn render_html(document: &Document<'_>) -> String {
    let events = rewrite(document);
    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

/// Replaces image and heading events with their docset HTML.
fn rewrite<'a>(document: &Document<'a>) -> Vec<Event<'a>> {
    let events = document.events();
    let mut out = Vec::with_capacity(events.len());
    let mut slugs = SlugRegistry::new();
    let mut i = 0;

    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::Heading(level, _, _)) => {
                let end = matching_end(events, i);
                let text = literal_text(&events[i + 1..end]);
                out.push(html_event(dash_anchor(&text)));
                out.push(html_event(format!(
                    "<{} id=\"{}\">",
                    heading_tag(*level),
                    escaped_html(&slugs.unique(&text))
                )));
            }
            Event::End(Tag::Heading(level, _, _)) => {
                out.push(html_event(format!("</{}>\n", heading_tag(*level))));
            }
            Event::Start(Tag::Image(_, dest, title)) => {
                out.push(html_event(image_tag(
                    dest,
                    title,
                    document.image_attributes(i),
                )));
                // alt text children are not rendered
                i = matching_end(events, i);
            }
            event => out.push(event.clone()),
        }
        i += 1;
    }
    out
}

/// Concatenates the literal content of every text event, in order.
///
/// Nested inline elements are descended into, so `**Build** _Notes_`
/// yields `Build Notes`.
pub fn literal_text(events: &[Event<'_>]) -> String {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

/// Returns the Dash anchor name for a heading's literal text.
///
/// # Examples
///
/// ```
/// use notes::markdown::dash_anchor_name;
///
/// assert_eq!(dash_anchor_name("Build Notes"), "//apple_ref/cpp/Entry/Build%20Notes");
/// ```
pub fn dash_anchor_name(text: &str) -> String {
    format!("{}{}", DASH_ANCHOR_PREFIX, text.replace(' ', "%20"))
}

/// Rewrites an image destination for the flat docset resource layout.
///
/// Local paths lose every `img` segment and any leading `/`. Remote URLs
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use notes::markdown::rewrite_image_destination;
///
/// assert_eq!(rewrite_image_destination("/img/cat.png"), "cat.png");
/// assert_eq!(rewrite_image_destination("https://x.org/img/a.png"), "https://x.org/img/a.png");
/// ```
pub fn rewrite_image_destination(dest: &str) -> String {
    if is_remote(dest) {
        return dest.to_string();
    }
    dest.split('/')
        .enumerate()
        .filter(|(i, segment)| *segment != IMAGE_DIR_SEGMENT && !(*i == 0 && segment.is_empty()))
        .map(|(_, segment)| segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn is_remote(dest: &str) -> bool {
    dest.contains("://") || dest.starts_with("//") || dest.starts_with("data:")
}

fn dash_anchor(text: &str) -> String {
    format!(
        "<a name=\"{}\" class=\"dashAnchor\"></a>",
        escaped_html(&dash_anchor_name(text))
    )
}

fn image_tag(dest: &str, title: &str, attributes: Option<&ImageAttributes>) -> String {
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escaped_href(&rewrite_image_destination(dest)),
        escaped_html(title)
    );
    for (name, value) in attributes.into_iter().flat_map(|a| a.pairs()) {
        tag.push_str(&format!(" {}=\"{}\"", name, escaped_html(value)));
    }
    tag.push_str(" />");
    tag
}

/// Returns the index of the `End` event closing the `Start` at `start`.
///
/// Falls back to the last event for unbalanced input.
fn matching_end(events: &[Event<'_>], start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, event) in events[start..].iter().enumerate() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return start + offset;
                }
            }
            _ => {}
        }
    }
    events.len() - 1
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn html_event<'a>(html: String) -> Event<'a> {
    Event::Html(CowStr::from(html))
}

/// Escapes `&`, `<`, `>` and `"` for HTML text and attribute values.
pub fn escaped_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // writing into a String cannot fail
    let _ = escape_html(&mut out, text);
    out
}

fn escaped_href(href: &str) -> String {
    let mut out = String::with_capacity(href.len());
    let _ = escape_href(&mut out, href);
    out
}
