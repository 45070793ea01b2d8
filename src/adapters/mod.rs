pub mod dialoguer_prompter;
pub mod embedded_template_catalog;
pub mod system_process_runner;

pub use dialoguer_prompter::DialoguerPrompter;
pub use system_process_runner::SystemProcessRunner;
