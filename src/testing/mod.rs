mod fake_process_runner;
mod scripted_prompter;

pub use fake_process_runner::FakeProcessRunner;
pub use scripted_prompter::{Answer, ScriptedPrompter};
