//! Core types: Note, Day, Month and the month grouping

mod calendar;
mod note;

pub use calendar::{DatedEntry, Day, HEADLINE_SEPARATOR, Month, group_by_month, most_recent, page_day};
pub use note::{
    Note, extract_headlines, month_key, page_file_name, parse_date_prefix, strip_extensions,
};
