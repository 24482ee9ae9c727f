//! Markdown parsing and HTML rendering for docset pages.
//!
//! A note is parsed into a [`Document`] with a fixed, ordered set of syntax
//! extensions and rendered to an HTML fragment by the docset rewriter.

mod autolink;
mod image_attributes;
mod rewriter;
mod slug;

use pulldown_cmark::{CowStr, Event, Options, Parser};
use std::collections::HashMap;

pub use image_attributes::{ImageAttributes, parse_attribute_block};
pub use rewriter::{
    DASH_ANCHOR_PREFIX, dash_anchor_name, escaped_html, literal_text, render_html, rewrite_image_destination,
};
pub use slug::{SlugRegistry, heading_slug};

/// A syntax extension on top of CommonMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// Bare URLs and e-mail addresses become links.
    Autolink,
    /// `~~text~~` becomes `<del>`.
    Strikethrough,
    /// Headings get an `id` slug.
    HeadingAnchor,
    /// `{width=.. height=..}` after an image sets its size.
    ImageAttributes,
    /// `- [ ]` and `- [x]` list items become checkboxes.
    TaskListItems,
    /// GFM pipe tables.
    Tables,
}

/// The extensions used for every note, in registration order.
pub const EXTENSIONS: [Extension; 6] = [
    Extension::Autolink,
    Extension::Strikethrough,
    Extension::HeadingAnchor,
    Extension::ImageAttributes,
    Extension::TaskListItems,
    Extension::Tables,
];

impl Extension {
    /// Returns the parser option this extension needs, if any.
    fn parser_option(self) -> Option<Options> {
        match self {
            Extension::Strikethrough => Some(Options::ENABLE_STRIKETHROUGH),
            Extension::TaskListItems => Some(Options::ENABLE_TASKLISTS),
            Extension::Tables => Some(Options::ENABLE_TABLES),
            Extension::Autolink | Extension::HeadingAnchor | Extension::ImageAttributes => None,
        }
    }
}

/// Returns the pulldown-cmark options for [`EXTENSIONS`].
pub fn markdown_options() -> Options {
    EXTENSIONS
        .iter()
        .filter_map(|ext| ext.parser_option())
        .fold(Options::empty(), |acc, opt| acc | opt)
}

/// A parsed note.
///
/// The syntax tree is kept as pulldown-cmark's balanced event sequence:
/// every `Start` is closed by a matching `End`, and children sit between
/// them in document order.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    events: Vec<Event<'a>>,
    image_attributes: HashMap<usize, ImageAttributes>,
}

impl<'a> Document<'a> {
    /// Parses markdown text. Malformed markdown never fails; unclosed
    /// constructs fall back to literal text.
    pub fn parse(markdown: &'a str) -> Self {
        let mut events = merge_text(Parser::new_ext(markdown, markdown_options()).collect());
        let mut sizes = HashMap::new();

        for extension in EXTENSIONS {
            match extension {
                Extension::Autolink => events = autolink::autolink(events),
                Extension::ImageAttributes => {
                    let (attached, attributes) = image_attributes::attach_image_attributes(events);
                    events = attached;
                    sizes = attributes;
                }
                // handled by the parser options or the renderer
                Extension::Strikethrough
                | Extension::HeadingAnchor
                | Extension::TaskListItems
                | Extension::Tables => {}
            }
        }

        Self {
            events,
            image_attributes: sizes,
        }
    }

    /// Returns the document's events.
    pub fn events(&self) -> &[Event<'a>] {
        &self.events
    }

    /// Returns the size attributes of the image starting at `index`.
    pub fn image_attributes(&self, index: usize) -> Option<&ImageAttributes> {
        self.image_attributes.get(&index)
    }
}

/// Converts markdown text to an HTML fragment.
///
/// # Example
///
/// ```
/// use notes::markdown::markdown_to_html;
///
/// let html = markdown_to_html("Hello ~~old~~ world");
/// assert!(html.contains("<del>old</del>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    render_html(&Document::parse(markdown))
}

/// Joins adjacent text events into one.
fn merge_text(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out: Vec<Event<'_>> = Vec::with_capacity(events.len());
    for event in events {
        if let Event::Text(next) = &event
            && let Some(Event::Text(prev)) = out.last_mut()
        {
            *prev = CowStr::from(format!("{}{}", prev, next));
            continue;
        }
        out.push(event);
    }
    out
}
