//! Runtime configuration read once at start-up.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::AppError;

pub const CI_ENV: &str = "CI";
pub const ICON_FAILURE_ENV: &str = "CREATE_VITRON_ICON_FAILURE";
pub const SUMMARY_DELAY_ENV: &str = "CREATE_VITRON_SUMMARY_DELAY_MS";

const DEFAULT_SUMMARY_DELAY: Duration = Duration::from_millis(2000);

/// What to do when icon conversion fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconFailurePolicy {
    /// Keep the template's default icons and continue.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

impl FromStr for IconFailurePolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(IconFailurePolicy::Skip),
            "abort" => Ok(IconFailurePolicy::Abort),
            other => Err(AppError::config_error(format!(
                "Invalid {} '{}': expected 'skip' or 'abort'",
                ICON_FAILURE_ENV, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory the project is created in.
    pub cwd: PathBuf,
    /// Attached terminal and not running under CI.
    pub interactive: bool,
    pub icon_failure: IconFailurePolicy,
    /// Pause between `DONE!` and the summary screen.
    pub summary_delay: Duration,
}

impl RuntimeConfig {
    /// Read the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        let is_tty = console::Term::stdout().is_term();
        Self::from_lookup(cwd, is_tty, |key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(cwd: PathBuf, is_tty: bool, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ci = lookup(CI_ENV).is_some_and(|value| !value.is_empty());

        let icon_failure = match lookup(ICON_FAILURE_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => IconFailurePolicy::default(),
        };

        let summary_delay = match lookup(SUMMARY_DELAY_ENV) {
            Some(value) if !value.trim().is_empty() => {
                let millis = value.trim().parse::<u64>().map_err(|err| {
                    AppError::config_error(format!(
                        "Invalid {} '{}': {}",
                        SUMMARY_DELAY_ENV, value, err
                    ))
                })?;
                Duration::from_millis(millis)
            }
            _ => DEFAULT_SUMMARY_DELAY,
        };

        Ok(Self { cwd, interactive: is_tty && !ci, icon_failure, summary_delay })
    }

    /// Non-interactive configuration rooted at `cwd`, for embedding and tests.
    pub fn headless(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            interactive: false,
            icon_failure: IconFailurePolicy::default(),
            summary_delay: Duration::ZERO,
        }
    }
}
