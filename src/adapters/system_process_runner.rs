use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{Invocation, ProcessExit, ProcessRunner};

/// Runs child processes on the host with stdio detached.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError> {
        log::debug!("running `{}` in {}", invocation.display(), invocation.cwd.display());

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| AppError::Spawn { program: invocation.program.clone(), source })?;

        log::debug!("`{}` exited with {:?}", invocation.display(), status.code());
        Ok(ProcessExit { code: status.code() })
    }
}
