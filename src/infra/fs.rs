//! File system helpers for the notes directory and the docset output tree.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Lists the regular files directly inside `dir` that satisfy `keep`.
///
/// The listing is flat (no recursion) and sorted by file name so that every
/// run sees the same order. Symlinks are followed; a dangling link is logged
/// and skipped. Hidden entries (names starting with `.`) are skipped.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn list_files<F>(dir: &Path, keep: F) -> Result<Vec<PathBuf>, FsError>
where
    F: Fn(&Path) -> bool,
{
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
            Err(e) => return Err(walk_error(dir, e)),
        };
        if is_hidden(&entry) {
            debug!(path = %entry.path().display(), "skipping hidden file");
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        if keep(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Lists the markdown notes (`*.md`, any case) in a notes directory.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    list_files(dir, has_md_extension)
}

/// Reads a text file and normalizes its line endings to `\n`.
///
/// Lines are re-joined without a trailing newline.
pub fn read_text_lines(path: &Path) -> Result<String, FsError> {
    let content = fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(content.lines().collect::<Vec<_>>().join("\n"))
}

/// Writes `contents` to a file that must not exist yet.
///
/// # Errors
///
/// Returns `FsError::AlreadyExists` if the file is already present.
pub fn write_new_file(path: &Path, contents: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FsError::from_io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| FsError::from_io(path, e))
}

/// Deletes `root` and everything below it, children before their parents.
///
/// Does nothing if `root` doesn't exist.
pub fn remove_tree(root: &Path) -> Result<(), FsError> {
    if !root.exists() {
        return Ok(());
    }

    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let path = entry.path();
        let result = if entry.file_type().is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io(path, e))?;
    }
    Ok(())
}

/// Creates a directory and all of its missing parents.
pub fn create_dirs(path: &Path) -> Result<(), FsError> {
    fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
}

/// Returns the final path component as UTF-8, if it has one.
pub fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

fn has_md_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn walk_error(root: &Path, error: walkdir::Error) -> FsError {
    let path = error
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match error.into_io_error() {
        Some(io_error) => FsError::from_io(&path, io_error),
        None => FsError::Io {
            path,
            source: io::Error::other("file system loop detected"),
        },
    }
}
