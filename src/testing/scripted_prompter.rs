use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{Choice, Prompter};

/// Scripted answer for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Pick(usize),
    /// Take the question's default choice.
    Default,
    Cancel,
}

/// Replays answers in order and records the prompts it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self { answers: Mutex::new(answers.into_iter().collect()), asked: Mutex::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt '{}'", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str) -> Result<Option<String>, AppError> {
        match self.next(prompt) {
            Answer::Text(value) => Ok(Some(value)),
            Answer::Default => Ok(Some(String::new())),
            Answer::Cancel => Ok(None),
            Answer::Pick(_) => panic!("expected text answer for '{}'", prompt),
        }
    }

    fn select(
        &self,
        prompt: &str,
        choices: &[Choice],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.next(prompt) {
            Answer::Pick(index) => {
                assert!(index < choices.len(), "choice {} out of range for '{}'", index, prompt);
                Ok(Some(index))
            }
            Answer::Default => Ok(Some(default)),
            Answer::Cancel => Ok(None),
            Answer::Text(_) => panic!("expected selection for '{}'", prompt),
        }
    }
}
