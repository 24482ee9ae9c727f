//! Docset rendering pipeline.
//!
//! Turns a directory of dated markdown notes into a Dash docset plus a
//! frameset table of contents. Every render is a full rebuild; stages run in
//! a fixed order and each one reads what the previous one left on disk:
//!
//! 1. clear and recreate the output tree
//! 2. copy static assets
//! 3. write `Info.plist`
//! 4. render one page per note
//! 5. index the rendered pages into `docSet.dsidx`
//! 6. write the overview page from the source notes
//! 7. write `toc.html` and the `index.html` frameset from the rendered pages

mod error;
mod layout;
mod overview;
mod pages;
mod structure;
mod template;

pub use error::DocsetError;
pub use layout::{
    CONTENTS_DIR, DEFAULT_ASSETS_DIR, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_BUNDLE_NAME,
    DEFAULT_OUTPUT_DIR, DEFAULT_TODO_FILE, DOCSET_NAME, DOCUMENTS_DIR, DocsetConfig, DocsetLayout,
    RESOURCES_DIR,
};
pub use overview::{
    NO_CURRENT_PAGE, current_page, overview_months, toc_months, write_overview, write_toc,
};
pub use pages::{build_search_index, render_pages, rendered_page_files, write_search_entries};
pub use structure::{
    AssetCopy, check_output_root, copy_static_assets, reinit_output, write_manifest,
};
pub use template::{Manifest, TemplateKind, Templates};

use serde::Serialize;
use tracing::info;

use crate::domain::Note;
use crate::infra::list_markdown_files;

/// Summary of a finished render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Pages written to `Documents/`.
    pub pages: usize,
    /// Rows in the search index.
    pub index_entries: usize,
    pub assets_copied: usize,
    pub asset_failures: usize,
    /// Months on the overview page.
    pub months: usize,
    /// Undated notes left out of the overview.
    pub skipped_undated: usize,
}

/// Renders the whole docset described by `config`.
///
/// # Errors
///
/// Fails on anything that leaves the docset unusable: a missing notes
/// directory, an unsafe output root, a template error, or a failed write
/// of a page, the manifest, the overview, the table of contents, or the
/// search index. The output tree is not rolled back.
pub fn render_docset(config: &DocsetConfig) -> Result<RenderReport, DocsetError> {
    if !config.notes_dir.is_dir() {
        return Err(DocsetError::NotesDirMissing(config.notes_dir.clone()));
    }
    check_output_root(config)?;
    let templates = Templates::load(config.templates_dir.as_deref())?;
    let layout = config.layout();
    let notes = load_notes(config)?;

    info!(
        notes = notes.len(),
        output = %layout.root().display(),
        "rendering docset"
    );

    reinit_output(&layout)?;
    let assets = copy_static_assets(&config.assets_dir, &layout.documents_dir());
    write_manifest(
        &layout,
        &templates,
        &Manifest {
            bundle_identifier: config.bundle_identifier.clone(),
            bundle_name: config.bundle_name.clone(),
        },
    )?;

    let pages = render_pages(&notes, &layout, &templates)?;
    let index_entries = build_search_index(&layout)?;

    let (overview, skipped_undated) = overview_months(&notes, &config.todo_file);
    write_overview(&layout, &templates, &overview)?;

    let toc = toc_months(&rendered_page_files(&layout.documents_dir())?);
    write_toc(&layout, &templates, &toc)?;

    let report = RenderReport {
        pages,
        index_entries,
        assets_copied: assets.copied,
        asset_failures: assets.failed,
        months: overview.len(),
        skipped_undated,
    };
    info!(
        pages = report.pages,
        index_entries = report.index_entries,
        months = report.months,
        "docset rendered"
    );
    Ok(report)
}

fn load_notes(config: &DocsetConfig) -> Result<Vec<Note>, DocsetError> {
    Ok(list_markdown_files(&config.notes_dir)?
        .into_iter()
        .filter_map(Note::from_path)
        .collect())
}
