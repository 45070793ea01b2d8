use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A child process to run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Command line as shown in errors.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Convert into an error for `invocation` when unsuccessful.
    pub fn into_result(self, invocation: &Invocation) -> Result<(), AppError> {
        if self.is_success() {
            return Ok(());
        }
        Err(AppError::CommandFailed { command: invocation.display(), code: self.code.unwrap_or(1) })
    }
}

/// Spawns child processes with their output suppressed.
pub trait ProcessRunner {
    /// Run to completion. `Err` only when the process could not be started.
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError>;
}
