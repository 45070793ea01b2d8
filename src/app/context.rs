use crate::app::config::RuntimeConfig;
use crate::domain::TemplateCatalog;
use crate::ports::{ProcessRunner, Prompter};

/// Application context holding dependencies for one scaffold run.
pub struct AppContext<P: Prompter, R: ProcessRunner> {
    prompter: P,
    runner: R,
    catalog: TemplateCatalog,
    config: RuntimeConfig,
}

impl<P: Prompter, R: ProcessRunner> AppContext<P, R> {
    /// Create a new application context.
    pub fn new(prompter: P, runner: R, catalog: TemplateCatalog, config: RuntimeConfig) -> Self {
        Self { prompter, runner, catalog, config }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}
