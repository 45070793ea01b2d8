use std::io;

use thiserror::Error;

/// Library-wide error type for create-vitron operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a specific project file.
    #[error("Failed to access {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Target project directory is already present in the working directory.
    #[error("🚧 Directory \"{0}\" already exists.")]
    DirectoryExists(String),

    /// Neither yarn nor npm answered the version check.
    #[error("No available package manager! (`npm` or `yarn` is required)")]
    NoPackageManager,

    /// A child process could not be started at all.
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A child process exited unsuccessfully.
    #[error("'{command}' failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// Prompt interaction failed for a reason other than cancellation.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// Template catalog content is invalid.
    #[error("Invalid template '{template}': {details}")]
    InvalidTemplate { template: String, details: String },

    /// Requested template id does not exist in the catalog.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Replacement pattern failed to compile.
    #[error("Invalid replacement pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Icon source is missing from the project root.
    #[error("icon.png not found at {0}")]
    IconMissing(String),

    /// Icon source is not square.
    #[error("icon.png must be square, got {width}x{height}")]
    IconNotSquare { width: u32, height: u32 },

    /// Image decoding or encoding failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn file_access(path: &std::path::Path, source: io::Error) -> Self {
        AppError::FileAccess { path: path.display().to_string(), source }
    }

    /// Process exit code used when this error terminates the CLI.
    ///
    /// Failed child processes propagate their own code; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CommandFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
