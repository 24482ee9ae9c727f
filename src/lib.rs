//! notes - dated markdown notes rendered as a browsable docset

pub mod cli;
pub mod docset;
pub mod domain;
pub mod index;
pub mod infra;
pub mod markdown;

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::{Config, RenderOverrides},
    handlers::{handle_completions, handle_render},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let overrides = RenderOverrides {
        dir: cli.dir.clone(),
        ..Default::default()
    };

    match &cli.command {
        Command::Render(args) => handle_render(args, &config, overrides),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notes={default_level}")));

    // a second init (tests calling run twice) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
