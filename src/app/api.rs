//! API Facade for the application.
//!
//! High-level functions that glue context creation and command execution
//! together for embedders that bring their own prompter or process runner.

use std::path::Path;

use crate::adapters::embedded_template_catalog;
use crate::app::AppContext;
use crate::app::commands::{scaffold, summary};
use crate::app::config::RuntimeConfig;
use crate::domain::{ReplacementRule, ScaffoldRequest, TemplateCatalog, build_rules};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::{ProgressReporter, template_configurer};

pub use crate::app::commands::scaffold::{IconStatus, ScaffoldOutcome, ScaffoldSummary};
pub use crate::app::commands::summary::SummaryView;
pub use crate::domain::AppError;
pub use crate::services::ConfigureReport;

/// Templates compiled into the binary.
pub fn embedded_catalog() -> Result<TemplateCatalog, AppError> {
    embedded_template_catalog::load()
}

/// Ask the questions through `prompter` and scaffold into `config.cwd`.
pub fn scaffold_with<P, R>(
    prompter: P,
    runner: R,
    catalog: TemplateCatalog,
    config: RuntimeConfig,
    reporter: &mut ProgressReporter,
) -> Result<ScaffoldOutcome, AppError>
where
    P: Prompter,
    R: ProcessRunner,
{
    let ctx = AppContext::new(prompter, runner, catalog, config);
    scaffold::execute(&ctx, reporter)
}

/// Scaffold a pre-built request without asking the collection questions.
///
/// The prompter is still consulted for the icon placement confirmation.
pub fn scaffold_request<P, R>(
    prompter: P,
    runner: R,
    catalog: TemplateCatalog,
    config: RuntimeConfig,
    request: ScaffoldRequest,
    reporter: &mut ProgressReporter,
) -> Result<ScaffoldSummary, AppError>
where
    P: Prompter,
    R: ProcessRunner,
{
    let ctx = AppContext::new(prompter, runner, catalog, config);
    scaffold::run(&ctx, request, reporter)
}

/// Replacement rules `request` produces against its template.
pub fn rules_for(
    catalog: &TemplateCatalog,
    request: &ScaffoldRequest,
) -> Result<Vec<ReplacementRule>, AppError> {
    build_rules(catalog.get(&request.template)?, request)
}

/// Apply the configuration step to an already fetched project tree.
pub fn configure_project(
    project: &Path,
    catalog: &TemplateCatalog,
    request: &ScaffoldRequest,
) -> Result<ConfigureReport, AppError> {
    template_configurer::configure(project, &rules_for(catalog, request)?)
}

/// The `--docs` screen for the default template.
pub fn docs() -> Result<String, AppError> {
    let catalog = embedded_catalog()?;
    let variant = catalog.default_variant();
    Ok(summary::render(variant, &SummaryView::defaults(variant)))
}
