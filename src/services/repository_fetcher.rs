use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{Invocation, ProcessRunner};

const GIT_DIR: &str = ".git";

/// Where to clone from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub repository: String,
    pub branch: Option<String>,
}

/// Fail with `DirectoryExists` when `<cwd>/<name>` is already a directory.
pub fn ensure_target_available(cwd: &Path, name: &str) -> Result<PathBuf, AppError> {
    let target = cwd.join(name);
    if target.is_dir() {
        return Err(AppError::DirectoryExists(name.to_string()));
    }
    Ok(target)
}

pub fn clone_invocation(source: &TemplateSource, name: &str, cwd: &Path) -> Invocation {
    let mut args = vec!["clone".to_string()];
    if let Some(branch) = &source.branch {
        args.push("-b".to_string());
        args.push(branch.clone());
    }
    args.extend([source.repository.clone(), name.to_string(), "--depth".into(), "1".into()]);
    Invocation::new("git", args, cwd)
}

/// Shallow-clone `source` into `<cwd>/<name>` and strip its history.
pub fn fetch<R: ProcessRunner>(
    runner: &R,
    source: &TemplateSource,
    cwd: &Path,
    name: &str,
) -> Result<PathBuf, AppError> {
    let target = ensure_target_available(cwd, name)?;

    let invocation = clone_invocation(source, name, cwd);
    log::info!("cloning {} into {}", source.repository, target.display());
    runner.run(&invocation)?.into_result(&invocation)?;

    remove_git_metadata(&target)?;
    Ok(target)
}

/// Recursively delete `.git`; a missing directory is fine.
pub fn remove_git_metadata(project: &Path) -> Result<(), AppError> {
    match fs::remove_dir_all(project.join(GIT_DIR)) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
