//! Overview page and frameset table of contents.
//!
//! Both group days into months the same way. The overview works on source
//! notes and shows their headlines; the table of contents works on the
//! rendered pages and links them from the output root.

use tracing::{debug, warn};

use super::error::DocsetError;
use super::layout::DocsetLayout;
use super::template::Templates;
use crate::domain::{DatedEntry, Day, Month, Note, group_by_month, most_recent, page_day};
use crate::infra::write_new_file;

/// Frameset target used when there is no dated page.
pub const NO_CURRENT_PAGE: &str = "N/A";

/// Page name prefixes left out of the table of contents.
const NON_NOTE_PAGE_PREFIXES: [&str; 2] = ["toc", "index"];

/// Months for the overview page, plus the number of undated notes skipped.
///
/// The reserved todo file is left out. Day links are relative to
/// `Documents/`.
pub fn overview_months(notes: &[Note], todo_file: &str) -> (Vec<Month>, usize) {
    let mut skipped = 0;
    let mut entries = Vec::with_capacity(notes.len());

    for note in notes {
        if note.is_reserved(todo_file) {
            debug!(note = %note.file_name(), "reserved note left out of overview");
            continue;
        }
        let day = Day::with_headlines(note.name(), note.page_file_name(), &note.read_headlines());
        match DatedEntry::new(note.file_name(), day) {
            Some(entry) => entries.push(entry),
            None => {
                warn!(note = %note.file_name(), "note name does not start with a yyyy-MM-dd date, left out of overview");
                skipped += 1;
            }
        }
    }

    (group_by_month(entries), skipped)
}

/// Months for the table of contents, built from rendered page file names.
///
/// Day links are relative to the output root.
pub fn toc_months(page_files: &[String]) -> Vec<Month> {
    let entries = page_files
        .iter()
        .filter(|page| {
            !NON_NOTE_PAGE_PREFIXES
                .iter()
                .any(|prefix| page.starts_with(*prefix))
        })
        .filter_map(|page| {
            let entry = DatedEntry::new(page.as_str(), page_day(page, DocsetLayout::root_link(page)));
            if entry.is_none() {
                debug!(page = %page, "undated page left out of table of contents");
            }
            entry
        });
    group_by_month(entries)
}

/// Returns the frameset target: the most recent page, or `"N/A"`.
pub fn current_page(months: &[Month]) -> &str {
    most_recent(months)
        .map(|day| day.file_name.as_str())
        .unwrap_or(NO_CURRENT_PAGE)
}

/// Writes `Documents/index.html`.
pub fn write_overview(
    layout: &DocsetLayout,
    templates: &Templates,
    months: &[Month],
) -> Result<(), DocsetError> {
    let html = templates.render_main(months)?;
    write_new_file(&layout.overview_path(), &html)?;
    Ok(())
}

/// Writes `toc.html` and the `index.html` frameset at the output root.
pub fn write_toc(
    layout: &DocsetLayout,
    templates: &Templates,
    months: &[Month],
) -> Result<(), DocsetError> {
    let toc = templates.render_toc(months)?;
    write_new_file(&layout.toc_path(), &toc)?;

    let current = current_page(months);
    debug!(current, "frameset target");
    let frameset = templates.render_frameset(current)?;
    write_new_file(&layout.frameset_path(), &frameset)?;
    Ok(())
}
