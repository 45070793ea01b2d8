use std::collections::BTreeMap;

/// The user's resolved choices for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    /// Template variant id.
    pub template: String,
    /// Feature key -> enabled.
    pub features: BTreeMap<String, bool>,
    /// Empty means "keep the template default".
    pub primary_color: String,
    pub use_custom_icon: bool,
    pub install_dependencies: bool,
}

impl ScaffoldRequest {
    pub fn new(project_name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            template: template.into(),
            features: BTreeMap::new(),
            primary_color: String::new(),
            use_custom_icon: false,
            install_dependencies: false,
        }
    }

    /// Lower-cased name used for package names, bundle ids and storage keys.
    pub fn identifier(&self) -> String {
        self.project_name.to_lowercase()
    }

    /// Whether `key` is enabled, falling back to `default` when never asked.
    pub fn feature_enabled(&self, key: &str, default: bool) -> bool {
        self.features.get(key).copied().unwrap_or(default)
    }

    pub fn with_feature(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.features.insert(key.into(), enabled);
        self
    }

    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    pub fn with_custom_icon(mut self, enabled: bool) -> Self {
        self.use_custom_icon = enabled;
        self
    }

    pub fn with_install(mut self, enabled: bool) -> Self {
        self.install_dependencies = enabled;
        self
    }

    pub fn has_primary_color(&self) -> bool {
        !self.primary_color.trim().is_empty()
    }
}
