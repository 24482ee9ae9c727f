//! File I/O helpers

mod fs;

pub use fs::{
    FsError, create_dirs, file_name_str, list_files, list_markdown_files, read_text_lines,
    remove_tree, write_new_file,
};
