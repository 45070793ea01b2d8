pub mod dependency_installer;
pub mod icon_converter;
pub mod progress_reporter;
pub mod repository_fetcher;
pub mod template_configurer;

pub use icon_converter::IconArtifacts;
pub use progress_reporter::{ProgressPhase, ProgressReporter, ReporterMode, StepOutcome};
pub use repository_fetcher::TemplateSource;
pub use template_configurer::ConfigureReport;
