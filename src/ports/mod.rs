mod process_runner;
mod prompter;

pub use process_runner::{Invocation, ProcessExit, ProcessRunner};
pub use prompter::{Choice, Prompter};
