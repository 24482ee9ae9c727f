//! Month and day groupings of dated notes and pages.
//!
//! Groupings are pure projections over file names. They are recomputed on
//! every render and never stored.

use serde::Serialize;
use std::collections::BTreeMap;

use super::note::{month_key, strip_extensions};

/// Separator placed between the headlines of a day's description.
pub const HEADLINE_SEPARATOR: &str = " | ";

/// One note or page in a month grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    /// The date string (file name without extensions).
    pub name: String,
    /// Link target for the day's page.
    pub file_name: String,
    /// The note's headlines joined by `" | "`, when computed.
    pub description: Option<String>,
}

impl Day {
    /// Creates a day without a description.
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            description: None,
        }
    }

    /// Creates a day whose description joins the given headlines.
    ///
    /// No headlines yield an empty description.
    pub fn with_headlines(
        name: impl Into<String>,
        file_name: impl Into<String>,
        headlines: &[String],
    ) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            description: Some(headlines.join(HEADLINE_SEPARATOR)),
        }
    }
}

/// Days sharing the same `yyyy-MM` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Month {
    /// The `yyyy-MM` key.
    pub name: String,
    /// Days of the month, newest first.
    pub days: Vec<Day>,
}

/// A day waiting to be grouped, keyed by the file it was derived from.
#[derive(Debug, Clone)]
pub struct DatedEntry {
    source_file_name: String,
    day: Day,
}

impl DatedEntry {
    /// Pairs a day with the file name its month is taken from.
    ///
    /// Returns `None` when the file name does not start with a date.
    pub fn new(source_file_name: impl Into<String>, day: Day) -> Option<Self> {
        let source_file_name = source_file_name.into();
        month_key(&source_file_name)?;
        Some(Self {
            source_file_name,
            day,
        })
    }

    fn month_key(&self) -> &str {
        month_key(&self.source_file_name).unwrap_or(&self.source_file_name)
    }
}

/// Groups dated entries into months.
///
/// Months are ordered by name descending, and the days within each month
/// by name descending, so the newest date always comes first. Entries with
/// equal day names keep a stable order by link target.
///
/// # Examples
///
/// ```
/// use notes::domain::{DatedEntry, Day, group_by_month};
///
/// let entries = ["2024-01-05.md", "2024-01-20.md", "2024-02-01.md"]
///     .iter()
///     .filter_map(|f| DatedEntry::new(*f, Day::new(&f[..10], format!("{f}.html"))));
/// let months = group_by_month(entries);
///
/// assert_eq!(months[0].name, "2024-02");
/// assert_eq!(months[1].days[0].name, "2024-01-20");
/// ```
pub fn group_by_month<I>(entries: I) -> Vec<Month>
where
    I: IntoIterator<Item = DatedEntry>,
{
    let mut by_month: BTreeMap<String, Vec<Day>> = BTreeMap::new();
    for entry in entries {
        by_month
            .entry(entry.month_key().to_string())
            .or_default()
            .push(entry.day);
    }

    by_month
        .into_iter()
        .rev()
        .map(|(name, mut days)| {
            days.sort_by(|a, b| {
                b.name
                    .cmp(&a.name)
                    .then_with(|| b.file_name.cmp(&a.file_name))
            });
            Month { name, days }
        })
        .collect()
}

/// Returns the most recent day, if there is one.
pub fn most_recent(months: &[Month]) -> Option<&Day> {
    months.first().and_then(|m| m.days.first())
}

/// Builds the day for a rendered page file name.
pub fn page_day(page_file_name: &str, link: impl Into<String>) -> Day {
    Day::new(strip_extensions(page_file_name), link)
}
