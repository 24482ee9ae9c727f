//! Command handlers for the CLI.

mod completions;
mod render;

pub use completions::handle_completions;
pub use render::handle_render;
