//! Note pages and the search index built from them.

use std::path::Path;
use tracing::debug;

use super::error::DocsetError;
use super::layout::DocsetLayout;
use super::template::Templates;
use crate::domain::Note;
use crate::index::{IndexResult, IndexWriter, SearchIndexEntry, SqliteIndex};
use crate::infra::{file_name_str, list_files, write_new_file};
use crate::markdown::markdown_to_html;

/// Extension of every rendered page.
const PAGE_EXTENSION: &str = "html";

/// Renders each note into `Documents/<note>.html`.
///
/// Returns the number of pages written. A page that already exists means
/// the output was not cleared and fails the render.
pub fn render_pages(
    notes: &[Note],
    layout: &DocsetLayout,
    templates: &Templates,
) -> Result<usize, DocsetError> {
    for note in notes {
        let text = note.read_text()?;
        let html = templates.render_page(&markdown_to_html(&text))?;
        let page = layout.page_path(&note.page_file_name());
        write_new_file(&page, &html)?;
        debug!(note = %note.file_name(), page = %page.display(), "rendered");
    }
    Ok(notes.len())
}

/// Lists the file names of the `.html` files in `documents_dir`, sorted.
pub fn rendered_page_files(documents_dir: &Path) -> Result<Vec<String>, DocsetError> {
    let files = list_files(documents_dir, |path| {
        path.extension().is_some_and(|e| e == PAGE_EXTENSION)
    })?;
    Ok(files
        .iter()
        .filter_map(|path| file_name_str(path).map(str::to_string))
        .collect())
}

/// Writes one `Entry` row per page file.
///
/// Returns the number of new rows; duplicates are skipped.
pub fn write_search_entries<W: IndexWriter>(
    writer: &mut W,
    page_files: &[String],
) -> IndexResult<usize> {
    let entries: Vec<SearchIndexEntry> = page_files
        .iter()
        .map(|page| SearchIndexEntry::for_page(page))
        .collect();
    writer.insert_entries(&entries)
}

/// Builds `docSet.dsidx` from the pages currently in `Documents/`.
pub fn build_search_index(layout: &DocsetLayout) -> Result<usize, DocsetError> {
    let pages = rendered_page_files(&layout.documents_dir())?;
    let mut index = SqliteIndex::open(&layout.search_index_path())?;
    let inserted = write_search_entries(&mut index, &pages)?;
    debug!(entries = inserted, "search index written");
    Ok(inserted)
}
