//! create-vitron: scaffold an Electron + Vite desktop app from a git template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigureReport, IconStatus, ScaffoldOutcome, ScaffoldSummary, SummaryView,
    configure_project, docs, embedded_catalog, rules_for, scaffold_request, scaffold_with,
};
pub use app::config::{IconFailurePolicy, RuntimeConfig};
pub use domain::{AppError, PackageManager, ScaffoldRequest, TemplateCatalog};
pub use ports::{Choice, Invocation, ProcessExit, ProcessRunner, Prompter};
pub use services::{ProgressReporter, ReporterMode};
