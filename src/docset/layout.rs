//! Render settings and the fixed docset directory layout.

use std::path::{Path, PathBuf};

/// Directory name of the docset bundle inside the output root.
pub const DOCSET_NAME: &str = "Notes.docset";
pub const CONTENTS_DIR: &str = "Contents";
pub const RESOURCES_DIR: &str = "Resources";
pub const DOCUMENTS_DIR: &str = "Documents";

pub const MANIFEST_FILE: &str = "Info.plist";
pub const SEARCH_INDEX_FILE: &str = "docSet.dsidx";
/// Overview page inside `Documents/`.
pub const OVERVIEW_FILE: &str = "index.html";
/// Navigation frame at the output root.
pub const TOC_FILE: &str = "toc.html";
/// Frameset at the output root.
pub const FRAMESET_FILE: &str = "index.html";

/// Default name of the running todo list.
pub const DEFAULT_TODO_FILE: &str = "todo.md";
pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "notes";
pub const DEFAULT_BUNDLE_NAME: &str = "Notes";

/// Default output root, relative to the notes directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default static asset directory, relative to the notes directory.
pub const DEFAULT_ASSETS_DIR: &str = "img";

/// Resolved settings for one render.
///
/// Built once (usually from the CLI and config file) and passed read-only
/// to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsetConfig {
    /// Flat directory of markdown notes.
    pub notes_dir: PathBuf,
    /// Output root; cleared and rebuilt on every render.
    pub output_dir: PathBuf,
    /// Static assets copied flat into `Documents/`.
    pub assets_dir: PathBuf,
    /// Reserved todo file name, left out of the overview.
    pub todo_file: String,
    pub bundle_identifier: String,
    pub bundle_name: String,
    /// Directory with template overrides.
    pub templates_dir: Option<PathBuf>,
}

impl DocsetConfig {
    /// Creates settings with every other value defaulted relative to
    /// `notes_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes::docset::DocsetConfig;
    /// use std::path::Path;
    ///
    /// let config = DocsetConfig::new("/home/me/notes");
    /// assert_eq!(config.output_dir, Path::new("/home/me/notes/output"));
    /// assert_eq!(config.assets_dir, Path::new("/home/me/notes/img"));
    /// assert_eq!(config.todo_file, "todo.md");
    /// ```
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        let notes_dir = notes_dir.into();
        Self {
            output_dir: notes_dir.join(DEFAULT_OUTPUT_DIR),
            assets_dir: notes_dir.join(DEFAULT_ASSETS_DIR),
            notes_dir,
            todo_file: DEFAULT_TODO_FILE.to_string(),
            bundle_identifier: DEFAULT_BUNDLE_IDENTIFIER.to_string(),
            bundle_name: DEFAULT_BUNDLE_NAME.to_string(),
            templates_dir: None,
        }
    }

    /// Returns the layout of the output tree.
    pub fn layout(&self) -> DocsetLayout {
        DocsetLayout::new(&self.output_dir)
    }
}

/// Paths of the generated docset tree under an output root.
///
/// ```text
/// <root>/index.html
/// <root>/toc.html
/// <root>/Notes.docset/Contents/Info.plist
/// <root>/Notes.docset/Contents/Resources/docSet.dsidx
/// <root>/Notes.docset/Contents/Resources/Documents/<page>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsetLayout {
    root: PathBuf,
}

impl DocsetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contents_dir(&self) -> PathBuf {
        self.root.join(DOCSET_NAME).join(CONTENTS_DIR)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join(RESOURCES_DIR)
    }

    pub fn documents_dir(&self) -> PathBuf {
        self.resources_dir().join(DOCUMENTS_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.contents_dir().join(MANIFEST_FILE)
    }

    pub fn search_index_path(&self) -> PathBuf {
        self.resources_dir().join(SEARCH_INDEX_FILE)
    }

    pub fn overview_path(&self) -> PathBuf {
        self.documents_dir().join(OVERVIEW_FILE)
    }

    pub fn toc_path(&self) -> PathBuf {
        self.root.join(TOC_FILE)
    }

    pub fn frameset_path(&self) -> PathBuf {
        self.root.join(FRAMESET_FILE)
    }

    /// Returns the path a rendered page is written to.
    pub fn page_path(&self, page_file_name: &str) -> PathBuf {
        self.documents_dir().join(page_file_name)
    }

    /// Returns the link to a page as seen from the output root.
    ///
    /// Links are relative so the whole output can be moved.
    pub fn root_link(page_file_name: &str) -> String {
        [
            DOCSET_NAME,
            CONTENTS_DIR,
            RESOURCES_DIR,
            DOCUMENTS_DIR,
            page_file_name,
        ]
        .join("/")
    }
}
