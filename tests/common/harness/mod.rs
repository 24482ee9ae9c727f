//! Test harness for CLI integration tests.
//!
//! Provides isolated notes directories, note creation helpers,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
