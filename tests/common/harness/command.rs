//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
pub struct NotesCommand {
    args: Vec<String>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(self, path: &Path) -> Self {
        self.path_arg("--dir", path)
    }

    /// Sets the `--config` option.
    pub fn config(self, path: &Path) -> Self {
        self.path_arg("--config", path)
    }

    /// Sets `--output` for `render`.
    pub fn output(self, path: &Path) -> Self {
        self.path_arg("--output", path)
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    fn path_arg(mut self, flag: &str, path: &Path) -> Self {
        self.args.push(flag.to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `render` command.
    pub fn render(self) -> Self {
        self.args(["render"])
    }

    /// Configures for the `completions` command.
    pub fn completions(self, shell: &str) -> Self {
        self.args(["completions", shell])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}
