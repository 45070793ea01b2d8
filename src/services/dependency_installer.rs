use std::path::Path;

use crate::domain::{AppError, PackageManager};
use crate::ports::{Invocation, ProcessRunner};

/// First package manager in priority order whose version check succeeds.
pub fn detect<R: ProcessRunner>(runner: &R, cwd: &Path) -> Result<PackageManager, AppError> {
    for manager in PackageManager::PRIORITY {
        let check = Invocation::new(manager.program(), manager.version_args().iter().copied(), cwd);
        match runner.run(&check) {
            Ok(exit) if exit.is_success() => {
                log::debug!("using {}", manager.name());
                return Ok(manager);
            }
            Ok(exit) => log::debug!("{} version check exited with {:?}", manager.name(), exit.code),
            Err(err) => log::debug!("{} unavailable: {}", manager.name(), err),
        }
    }
    Err(AppError::NoPackageManager)
}

/// Run `manager`'s install command inside `project`.
pub fn install<R: ProcessRunner>(
    runner: &R,
    manager: PackageManager,
    project: &Path,
) -> Result<(), AppError> {
    let invocation =
        Invocation::new(manager.program(), manager.install_args().iter().copied(), project);
    log::info!("installing dependencies with `{}`", manager.install_command());
    runner.run(&invocation)?.into_result(&invocation)
}
