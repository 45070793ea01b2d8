pub mod error;
pub mod package_manager;
pub mod replacement_rule;
pub mod scaffold_request;
pub mod template_catalog;
pub mod template_variant;

pub use error::AppError;
pub use package_manager::PackageManager;
pub use replacement_rule::{Replacement, ReplacementRule, build_rules};
pub use scaffold_request::ScaffoldRequest;
pub use template_catalog::TemplateCatalog;
pub use template_variant::{
    CommandRow, DocsSpec, FeatureSpec, IconTargets, PrimaryColorSpec, RuleSpec, TemplateVariant,
};
