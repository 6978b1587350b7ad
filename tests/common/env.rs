//! Test environment for running the dropmenu binary in isolation.
//!
//! Every environment owns a temp directory with an empty user options file,
//! and points `DROPMENU_CONFIG` at it so the developer's own options never
//! leak into a test.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a dropmenu CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
    options: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let options = root.path().join("options.toml");
        std::fs::write(&options, "").expect("Failed to write options file");

        Self {
            root,
            options,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dropmenu")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the environment root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Replace the user options layer
    pub fn write_options(&self, content: &str) {
        std::fs::write(&self.options, content).expect("Failed to write options file");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .args(args)
            .current_dir(cwd)
            .env("DROPMENU_CONFIG", &self.options)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run dropmenu");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
