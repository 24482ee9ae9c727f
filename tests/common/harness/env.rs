//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::NotesCommand;
use notes::docset::{DocsetConfig, DocsetLayout};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Lays out a temporary directory as
///
/// ```text
/// <tmp>/notes/        notes directory (with img/ once an asset is added)
/// <tmp>/out/          output root
/// <tmp>/config.toml   config file (absent until written)
/// ```
///
/// so tests never read the user's real config or notes.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir(root.join("notes")).expect("Failed to create notes directory");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.root.join("notes")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("out")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Layout of the output tree.
    pub fn layout(&self) -> DocsetLayout {
        DocsetLayout::new(self.output_dir())
    }

    /// Render settings pointing at this environment.
    pub fn docset_config(&self) -> DocsetConfig {
        DocsetConfig {
            output_dir: self.output_dir(),
            ..DocsetConfig::new(self.notes_dir())
        }
    }

    /// Writes a note into the notes directory and returns its path.
    pub fn add_note(&self, file_name: &str, text: &str) -> PathBuf {
        let path = self.notes_dir().join(file_name);
        fs::write(&path, text).expect("Failed to write note");
        path
    }

    /// Writes a static asset into `notes/img/`.
    pub fn add_asset(&self, file_name: &str, bytes: &[u8]) -> PathBuf {
        let dir = self.notes_dir().join("img");
        fs::create_dir_all(&dir).expect("Failed to create asset directory");
        let path = dir.join(file_name);
        fs::write(&path, bytes).expect("Failed to write asset");
        path
    }

    /// Writes the config file.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Writes a file relative to the environment root.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a generated page from `Documents/`.
    pub fn read_page(&self, file_name: &str) -> String {
        let path = self.layout().page_path(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates a NotesCommand bound to this environment's notes dir and config.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config(&self.config_path())
            .dir(&self.notes_dir())
    }

    /// `render` into this environment's output root.
    pub fn render(&self) -> NotesCommand {
        self.cmd().render().output(&self.output_dir())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
