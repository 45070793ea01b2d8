use std::io::ErrorKind;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::{Choice, Prompter};

/// Terminal prompts backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ctrl-C reads as cancellation; anything else is a prompt failure.
fn prompt_error<T>(what: &str, err: DialoguerError) -> Result<Option<T>, AppError> {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => Ok(None),
        err => Err(AppError::Prompt { what: what.to_string(), details: err.to_string() }),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let label = style(prompt).yellow().bold().to_string();
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            Err(err) => prompt_error(prompt, err),
        }
    }

    fn select(
        &self,
        prompt: &str,
        choices: &[Choice],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        let items: Vec<String> = choices
            .iter()
            .map(|choice| format!("{}  {}", choice.title, style(&choice.description).dim()))
            .collect();

        match Select::with_theme(&self.theme)
            .with_prompt(style(prompt).yellow().bold().to_string())
            .items(&items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact_opt()
        {
            Ok(selection) => Ok(selection),
            Err(err) => prompt_error(prompt, err),
        }
    }
}
