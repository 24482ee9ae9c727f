//! Bare URL and e-mail detection in text.

use pulldown_cmark::{CowStr, Event, LinkType, Tag};
use regex::Regex;
use std::sync::LazyLock;

static AUTOLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<url>(?:https?://|www\.)[^\s<]+)|(?P<email>[A-Za-z0-9._+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)+)",
    )
    .unwrap()
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['?', '!', '.', ',', ':', ';', '*', '_', '~', '\'', '"'];

/// A link found in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Found {
    Url { text: String },
    Email { text: String },
}

/// Turns bare URLs and e-mail addresses in `Text` events into links.
///
/// Text inside links, images, and code blocks is left alone.
pub fn autolink(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut skip_depth = 0usize;

    for event in events {
        match &event {
            Event::Start(Tag::Link(..) | Tag::Image(..) | Tag::CodeBlock(_)) => skip_depth += 1,
            Event::End(Tag::Link(..) | Tag::Image(..) | Tag::CodeBlock(_)) => {
                skip_depth = skip_depth.saturating_sub(1)
            }
            Event::Text(text) if skip_depth == 0 && AUTOLINK_RE.is_match(text) => {
                out.extend(split_links(text));
                continue;
            }
            _ => {}
        }
        out.push(event);
    }
    out
}

/// Splits a text run into plain text and link events.
fn split_links<'a>(text: &str) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut plain_start = 0;

    for caps in AUTOLINK_RE.captures_iter(text) {
        let (start, found) = match (caps.name("url"), caps.name("email")) {
            (Some(m), _) => {
                let trimmed = trim_url(m.as_str());
                if trimmed.is_empty() {
                    continue;
                }
                (m.start(), Found::Url { text: trimmed.to_string() })
            }
            (None, Some(m)) => (m.start(), Found::Email { text: m.as_str().to_string() }),
            (None, None) => continue,
        };

        if start > plain_start {
            events.push(Event::Text(CowStr::from(text[plain_start..start].to_string())));
        }

        let (link_type, dest, shown) = match found {
            Found::Url { text } if text.starts_with("www.") => {
                (LinkType::Autolink, format!("http://{}", text), text)
            }
            Found::Url { text } => (LinkType::Autolink, text.clone(), text),
            Found::Email { text } => (LinkType::Email, text.clone(), text),
        };
        plain_start = start + shown.len();

        let tag = Tag::Link(link_type, CowStr::from(dest), CowStr::Borrowed(""));
        events.push(Event::Start(tag.clone()));
        events.push(Event::Text(CowStr::from(shown)));
        events.push(Event::End(tag));
    }

    if plain_start < text.len() {
        events.push(Event::Text(CowStr::from(text[plain_start..].to_string())));
    }
    events
}

/// Drops trailing punctuation and unbalanced closing parentheses.
fn trim_url(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        if let Some(stripped) = candidate.strip_suffix(TRAILING_PUNCTUATION) {
            end = stripped.len();
            continue;
        }
        if candidate.ends_with(')') && candidate.matches(')').count() > candidate.matches('(').count()
        {
            end -= 1;
            continue;
        }
        break;
    }
    &url[..end]
}
