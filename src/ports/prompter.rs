use crate::domain::AppError;

/// One entry of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub description: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// Interactive question source.
///
/// `Ok(None)` means the user cancelled the question.
pub trait Prompter {
    /// Free-text question.
    fn text(&self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Single-choice question; returns the chosen index.
    fn select(&self, prompt: &str, choices: &[Choice], default: usize)
    -> Result<Option<usize>, AppError>;
}
