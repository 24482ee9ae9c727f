//! `{width=.. height=..}` blocks following images.

use pulldown_cmark::{CowStr, Event, Tag};
use std::collections::HashMap;

/// Size attributes given for an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAttributes {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl ImageAttributes {
    /// Returns the attributes as `(name, value)` pairs in output order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("width", &self.width), ("height", &self.height)]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }
}

/// Parses an attribute block at the start of `text`.
///
/// Returns the attributes and the text after the closing brace. Returns
/// `None` (the block stays literal text) when the block is unterminated,
/// empty, or contains anything but `width=` / `height=` pairs.
///
/// # Examples
///
/// ```
/// use notes::markdown::parse_attribute_block;
///
/// let (attrs, rest) = parse_attribute_block("{width=120 height=80} caption").unwrap();
/// assert_eq!(attrs.width.as_deref(), Some("120"));
/// assert_eq!(rest, " caption");
/// assert!(parse_attribute_block("{align=left}").is_none());
/// ```
pub fn parse_attribute_block(text: &str) -> Option<(ImageAttributes, &str)> {
    let inner_start = text.strip_prefix('{')?;
    let close = inner_start.find('}')?;
    let inner = &inner_start[..close];
    let rest = &inner_start[close + 1..];

    let mut attributes = ImageAttributes::default();
    let mut any = false;
    for pair in inner.split_whitespace() {
        let (key, value) = pair.split_once('=')?;
        if !is_valid_value(value) {
            return None;
        }
        match key.to_ascii_lowercase().as_str() {
            "width" => attributes.width = Some(value.to_string()),
            "height" => attributes.height = Some(value.to_string()),
            _ => return None,
        }
        any = true;
    }

    any.then_some((attributes, rest))
}

fn is_valid_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '%' || c == '.')
}

/// Moves attribute blocks that directly follow an image onto the image.
///
/// The returned map is keyed by the index of the image's `Start` event in
/// the returned event list.
pub(crate) fn attach_image_attributes(
    events: Vec<Event<'_>>,
) -> (Vec<Event<'_>>, HashMap<usize, ImageAttributes>) {
    let mut out = Vec::with_capacity(events.len());
    let mut attributes = HashMap::new();
    let mut open_images: Vec<usize> = Vec::new();
    let mut just_closed: Option<usize> = None;

    for event in events {
        match &event {
            Event::Start(Tag::Image(..)) => {
                open_images.push(out.len());
                just_closed = None;
            }
            Event::End(Tag::Image(..)) => {
                just_closed = open_images.pop();
                out.push(event);
                continue;
            }
            Event::Text(text) => {
                if let Some(start) = just_closed.take()
                    && let Some((attrs, rest)) = parse_attribute_block(text)
                {
                    attributes.insert(start, attrs);
                    if !rest.is_empty() {
                        out.push(Event::Text(CowStr::from(rest.to_string())));
                    }
                    continue;
                }
            }
            _ => just_closed = None,
        }
        out.push(event);
    }

    (out, attributes)
}
