//! Output tree setup: clearing, static assets, and the manifest.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::DocsetError;
use super::layout::{DocsetConfig, DocsetLayout};
use super::template::{Manifest, Templates};
use crate::infra::{create_dirs, list_files, remove_tree, write_new_file};

/// Outcome of the best-effort asset copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssetCopy {
    pub copied: usize,
    pub failed: usize,
}

/// Refuses output roots that would delete the notes on clear.
///
/// The output root may live inside the notes directory, but must not be the
/// notes directory or one of its ancestors.
pub fn check_output_root(config: &DocsetConfig) -> Result<(), DocsetError> {
    let notes = absolute(&config.notes_dir);
    let output = absolute(&config.output_dir);
    if notes.starts_with(&output) {
        return Err(DocsetError::UnsafeOutput { output, notes });
    }
    Ok(())
}

/// Resolves a path that may not exist yet against its nearest existing
/// ancestor.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            absolute(parent).join(name)
        }
        _ => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Deletes the output root and recreates the empty docset tree.
pub fn reinit_output(layout: &DocsetLayout) -> Result<(), DocsetError> {
    if layout.root().exists() {
        debug!(root = %layout.root().display(), "clearing output");
    }
    remove_tree(layout.root())?;
    create_dirs(&layout.documents_dir())?;
    Ok(())
}

/// Copies every file directly inside `assets_dir` into `documents_dir`.
///
/// Failures are logged per file and never stop the remaining copies. A
/// missing asset directory copies nothing.
pub fn copy_static_assets(assets_dir: &Path, documents_dir: &Path) -> AssetCopy {
    let mut result = AssetCopy::default();

    if !assets_dir.is_dir() {
        debug!(assets = %assets_dir.display(), "no static asset directory");
        return result;
    }

    let files = match list_files(assets_dir, |_| true) {
        Ok(files) => files,
        Err(e) => {
            warn!(assets = %assets_dir.display(), error = %e, "could not list static assets");
            return result;
        }
    };

    for source in files {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = documents_dir.join(name);
        match fs::copy(&source, &target) {
            Ok(_) => {
                debug!(asset = %source.display(), "copied");
                result.copied += 1;
            }
            Err(e) => {
                warn!(asset = %source.display(), error = %e, "could not copy static asset");
                result.failed += 1;
            }
        }
    }

    result
}

/// Renders and writes `Contents/Info.plist`.
pub fn write_manifest(
    layout: &DocsetLayout,
    templates: &Templates,
    manifest: &Manifest,
) -> Result<(), DocsetError> {
    let plist = templates.render_manifest(manifest)?;
    write_new_file(&layout.manifest_path(), &plist)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    // ===========================================
    // Output Root
    // ===========================================

    #[test]
    fn reinit_creates_docset_tree() {
        let dir = tempdir().unwrap();
        let layout = DocsetLayout::new(dir.path().join("out"));

        reinit_output(&layout).unwrap();

        assert!(layout.documents_dir().is_dir());
        assert!(layout.resources_dir().is_dir());
    }

    #[test]
    fn reinit_removes_stale_output() {
        let dir = tempdir().unwrap();
        let layout = DocsetLayout::new(dir.path().join("out"));
        reinit_output(&layout).unwrap();
        fs::write(layout.page_path("old.md.html"), "stale").unwrap();
        fs::write(layout.toc_path(), "stale").unwrap();
        fs::create_dir(layout.root().join("extra")).unwrap();

        reinit_output(&layout).unwrap();

        assert!(layout.documents_dir().is_dir());
        assert_eq!(fs::read_dir(layout.documents_dir()).unwrap().count(), 0);
        assert!(!layout.toc_path().exists());
        assert!(!layout.root().join("extra").exists());
    }

    #[test]
    fn output_inside_notes_dir_is_allowed() {
        let dir = tempdir().unwrap();
        let config = DocsetConfig::new(dir.path());

        assert!(check_output_root(&config).is_ok());
    }

    #[test]
    fn output_equal_to_notes_dir_is_refused() {
        let dir = tempdir().unwrap();
        let mut config = DocsetConfig::new(dir.path());
        config.output_dir = dir.path().to_path_buf();

        assert!(matches!(
            check_output_root(&config),
            Err(DocsetError::UnsafeOutput { .. })
        ));
    }

    #[test]
    fn output_above_notes_dir_is_refused() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes");
        fs::create_dir(&notes).unwrap();
        let mut config = DocsetConfig::new(&notes);
        config.output_dir = notes.join("..");

        assert!(matches!(
            check_output_root(&config),
            Err(DocsetError::UnsafeOutput { .. })
        ));
    }

    #[test]
    fn sibling_output_is_allowed() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes");
        fs::create_dir(&notes).unwrap();
        let mut config = DocsetConfig::new(&notes);
        config.output_dir = dir.path().join("notes-out");

        assert!(check_output_root(&config).is_ok());
    }

    // ===========================================
    // Static Assets
    // ===========================================

    #[test]
    fn copies_assets_flat() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("img");
        let docs = dir.path().join("docs");
        fs::create_dir_all(assets.join("nested")).unwrap();
        fs::create_dir(&docs).unwrap();
        fs::write(assets.join("cat.png"), b"png").unwrap();
        fs::write(assets.join("dog.jpg"), b"jpg").unwrap();
        fs::write(assets.join("nested/deep.png"), b"png").unwrap();

        let result = copy_static_assets(&assets, &docs);

        assert_eq!(result, AssetCopy { copied: 2, failed: 0 });
        assert_eq!(fs::read(docs.join("cat.png")).unwrap(), b"png");
        assert!(!docs.join("deep.png").exists());
        assert!(!docs.join("nested").exists());
    }

    #[test]
    fn missing_assets_dir_copies_nothing() {
        let dir = tempdir().unwrap();

        let result = copy_static_assets(&dir.path().join("img"), dir.path());

        assert_eq!(result, AssetCopy::default());
    }

    #[test]
    fn failed_copy_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("img");
        let docs = dir.path().join("docs");
        fs::create_dir(&assets).unwrap();
        fs::create_dir(&docs).unwrap();
        fs::write(assets.join("a.png"), b"a").unwrap();
        fs::write(assets.join("b.png"), b"b").unwrap();
        // a directory in the way makes the first copy fail
        fs::create_dir(docs.join("a.png")).unwrap();

        let result = copy_static_assets(&assets, &docs);

        assert_eq!(result, AssetCopy { copied: 1, failed: 1 });
        assert!(docs.join("b.png").is_file());
    }

    // ===========================================
    // Manifest
    // ===========================================

    #[test]
    fn writes_manifest_once() {
        let dir = tempdir().unwrap();
        let layout = DocsetLayout::new(dir.path());
        reinit_output(&layout).unwrap();
        let templates = Templates::builtin().unwrap();
        let manifest = Manifest {
            bundle_identifier: "notes".into(),
            bundle_name: "Notes".into(),
        };

        write_manifest(&layout, &templates, &manifest).unwrap();

        let plist = fs::read_to_string(layout.manifest_path()).unwrap();
        assert!(plist.contains("<string>Notes</string>"));
        assert!(write_manifest(&layout, &templates, &manifest).is_err());
    }
}
