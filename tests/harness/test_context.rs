//! Shared testing harness for `create-vitron` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the binary runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path a scaffold named `name` would be created at.
    pub(crate) fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Build a command for the compiled binary with plain, non-interactive output.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("create-vitron").expect("Failed to locate create-vitron binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("CI", "1")
            .env("CREATE_VITRON_SUMMARY_DELAY_MS", "0")
            .env_remove("RUST_LOG");
        cmd
    }
}
