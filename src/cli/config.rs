//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::docset::{
    DEFAULT_ASSETS_DIR, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_BUNDLE_NAME, DEFAULT_OUTPUT_DIR,
    DEFAULT_TODO_FILE, DocsetConfig,
};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Notes directory
    pub dir: Option<PathBuf>,

    /// Output root for `render`
    pub output: Option<PathBuf>,

    /// Static asset directory copied into the docset
    pub assets: Option<PathBuf>,

    /// Reserved todo file name, left out of the overview
    pub todo_file: Option<String>,

    pub bundle_identifier: Option<String>,

    pub bundle_name: Option<String>,

    /// Directory with template overrides
    pub templates: Option<PathBuf>,
}

/// Per-invocation overrides taken from CLI flags.
#[derive(Debug, Default, Clone)]
pub struct RenderOverrides {
    pub dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub templates: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `~/Documents/notes`
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(default_notes_dir)
    }

    /// Resolve every render setting into an immutable [`DocsetConfig`].
    ///
    /// Paths follow the same precedence as [`Config::notes_dir`]; output and
    /// assets default to `output/` and `img/` under the notes directory.
    pub fn docset_config(&self, overrides: &RenderOverrides) -> DocsetConfig {
        let notes_dir = self.notes_dir(overrides.dir.as_ref());
        DocsetConfig {
            output_dir: pick(&overrides.output, &self.output)
                .unwrap_or_else(|| notes_dir.join(DEFAULT_OUTPUT_DIR)),
            assets_dir: pick(&overrides.assets, &self.assets)
                .unwrap_or_else(|| notes_dir.join(DEFAULT_ASSETS_DIR)),
            templates_dir: pick(&overrides.templates, &self.templates),
            todo_file: self
                .todo_file
                .clone()
                .unwrap_or_else(|| DEFAULT_TODO_FILE.to_string()),
            bundle_identifier: self
                .bundle_identifier
                .clone()
                .unwrap_or_else(|| DEFAULT_BUNDLE_IDENTIFIER.to_string()),
            bundle_name: self
                .bundle_name
                .clone()
                .unwrap_or_else(|| DEFAULT_BUNDLE_NAME.to_string()),
            notes_dir,
        }
    }
}

fn pick(cli: &Option<PathBuf>, file: &Option<PathBuf>) -> Option<PathBuf> {
    cli.clone().or_else(|| file.clone())
}

fn default_notes_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notes")
}
