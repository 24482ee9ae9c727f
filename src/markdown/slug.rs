//! Heading anchor ids.

use std::collections::{HashMap, HashSet};

/// Id used for headings whose text yields an empty slug.
const EMPTY_SLUG: &str = "id";

/// Converts heading text to an anchor id.
///
/// - Converts to lowercase
/// - Replaces spaces with hyphens
/// - Keeps only alphanumeric characters, hyphens, and underscores
/// - Returns "id" for empty results
///
/// # Examples
///
/// ```
/// use notes::markdown::heading_slug;
///
/// assert_eq!(heading_slug("Build Notes"), "build-notes");
/// assert_eq!(heading_slug("What's new?"), "whats-new");
/// assert_eq!(heading_slug("!!!"), "id");
/// ```
pub fn heading_slug(text: &str) -> String {
    let mut result = String::new();
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            result.push(c);
        } else if c.is_whitespace() {
            result.push('-');
        }
    }

    if result.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        result
    }
}

/// Hands out heading ids that are unique within one page.
///
/// The first occurrence of a slug is used as is; repeats get `-1`, `-2`, …
/// skipping any id already handed out, so `Log`, `Log`, `Log 1` yields
/// `log`, `log-1`, `log-1-1`.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    issued: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a unique id for the given heading text.
    pub fn unique(&mut self, text: &str) -> String {
        let slug = heading_slug(text);
        let mut id = slug.clone();
        while self.issued.contains(&id) {
            let suffix = self.next_suffix.entry(slug.clone()).or_insert(0);
            *suffix += 1;
            id = format!("{}-{}", slug, suffix);
        }
        self.issued.insert(id.clone());
        id
    }
}
