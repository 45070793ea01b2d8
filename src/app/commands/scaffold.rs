//! The linear scaffold pipeline: fetch, configure, icon, install.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::collect;
use crate::app::config::IconFailurePolicy;
use crate::domain::{AppError, PackageManager, ScaffoldRequest, TemplateVariant, build_rules};
use crate::ports::{ProcessRunner, Prompter};
use crate::services::{
    ConfigureReport, IconArtifacts, ProgressReporter, TemplateSource, dependency_installer,
    icon_converter, repository_fetcher, template_configurer,
};

/// What happened to the custom icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    /// Not requested; template icons kept.
    Default,
    /// Requested but the user cancelled the placement confirmation.
    Declined,
    Custom(IconArtifacts),
    /// Conversion failed under the `skip` policy.
    Failed(String),
}

impl IconStatus {
    pub fn is_custom(&self) -> bool {
        matches!(self, IconStatus::Custom(_))
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct ScaffoldSummary {
    pub request: ScaffoldRequest,
    pub project_dir: PathBuf,
    pub configure: ConfigureReport,
    pub icon: IconStatus,
    /// Manager used for the install step, if it ran.
    pub package_manager: Option<PackageManager>,
}

#[derive(Debug, Clone)]
pub enum ScaffoldOutcome {
    Cancelled,
    Completed(Box<ScaffoldSummary>),
}

/// Collect choices interactively, then run the pipeline.
pub fn execute<P, R>(
    ctx: &AppContext<P, R>,
    reporter: &mut ProgressReporter,
) -> Result<ScaffoldOutcome, AppError>
where
    P: Prompter,
    R: ProcessRunner,
{
    let Some(request) = collect::collect(ctx.prompter(), ctx.catalog())? else {
        log::debug!("cancelled during prompts");
        return Ok(ScaffoldOutcome::Cancelled);
    };
    let summary = run(ctx, request, reporter)?;
    Ok(ScaffoldOutcome::Completed(Box::new(summary)))
}

/// Run the pipeline for an already collected request.
///
/// Failures propagate with the active step still open so the caller can mark
/// it failed.
pub fn run<P, R>(
    ctx: &AppContext<P, R>,
    request: ScaffoldRequest,
    reporter: &mut ProgressReporter,
) -> Result<ScaffoldSummary, AppError>
where
    P: Prompter,
    R: ProcessRunner,
{
    let variant = ctx.catalog().get(&request.template)?;
    let cwd = &ctx.config().cwd;
    let name = request.project_name.as_str();

    repository_fetcher::ensure_target_available(cwd, name)?;
    let rules = build_rules(variant, &request)?;

    reporter.start("Downloading and extracting...");
    let source =
        TemplateSource { repository: variant.repository.clone(), branch: variant.branch.clone() };
    let project_dir = repository_fetcher::fetch(ctx.runner(), &source, cwd, name)?;
    reporter.succeed();

    reporter.start("Configuring App...");
    let configure = template_configurer::configure(&project_dir, &rules)?;
    let identifier = request.identifier();
    let residual = template_configurer::residual_tokens(
        &project_dir,
        &rules,
        &[&variant.display_token, &variant.identifier_token],
        &[&request.project_name, &identifier],
    )?;
    if !residual.is_empty() {
        log::info!("placeholders remain in {:?}", residual);
    }
    reporter.succeed();

    let icon = if request.use_custom_icon {
        customize_icon(ctx, variant, &request, &project_dir, reporter)?
    } else {
        IconStatus::Default
    };

    let package_manager = if request.install_dependencies {
        let manager = dependency_installer::detect(ctx.runner(), cwd)?;
        reporter.start("Installing Node Modules (grab a coffee)...");
        dependency_installer::install(ctx.runner(), manager, &project_dir)?;
        reporter.succeed();
        Some(manager)
    } else {
        None
    };

    Ok(ScaffoldSummary { request, project_dir, configure, icon, package_manager })
}

fn customize_icon<P, R>(
    ctx: &AppContext<P, R>,
    variant: &TemplateVariant,
    request: &ScaffoldRequest,
    project_dir: &std::path::Path,
    reporter: &mut ProgressReporter,
) -> Result<IconStatus, AppError>
where
    P: Prompter,
    R: ProcessRunner,
{
    if !collect::confirm_icon_placed(ctx.prompter(), &request.project_name)? {
        return Ok(IconStatus::Declined);
    }

    reporter.start("Converting icon.png...");
    match icon_converter::convert(project_dir, &variant.icon) {
        Ok(artifacts) => {
            reporter.succeed();
            Ok(IconStatus::Custom(artifacts))
        }
        Err(err) if ctx.config().icon_failure == IconFailurePolicy::Skip => {
            reporter.fail();
            log::warn!("icon conversion failed, keeping template icons: {}", err);
            Ok(IconStatus::Failed(err.to_string()))
        }
        Err(err) => Err(err),
    }
}
