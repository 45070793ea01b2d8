//! Declarative description of a scaffold template.
//!
//! A variant names the remote repository to clone, the placeholder tokens it
//! ships with, the ordered replacement table, the feature-flag schema and the
//! icon locations the generated project expects.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use crate::domain::AppError;

/// Variables expanded in replacement text: `{name}`, `{id}` and `{color}`.
pub const VARIABLES_PATTERN: &str = r"\{(name|id|color)\}";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateVariant {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub repository: String,
    #[serde(default)]
    pub branch: Option<String>,
    /// Display-name placeholder, e.g. `Vitron`.
    pub display_token: String,
    /// Lower-case identifier placeholder, e.g. `vitron`.
    pub identifier_token: String,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    #[serde(default)]
    pub features: Vec<FeatureSpec>,
    #[serde(default)]
    pub primary_color: Option<PrimaryColorSpec>,
    #[serde(default)]
    pub icon: IconTargets,
    #[serde(default)]
    pub docs: DocsSpec,
}

/// One row of the unconditional replacement table.
///
/// Either `pattern` + `replacement`, or a `tokens` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub files: Vec<String>,
    /// Regular expression matched against whole file contents.
    #[serde(default)]
    pub pattern: String,
    /// Literal replacement; `{name}` and `{id}` are expanded first.
    #[serde(default)]
    pub replacement: String,
    /// Placeholder -> replacement, all substituted in a single pass.
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
    /// Rule targets files that only some template revisions ship.
    #[serde(default)]
    pub optional: bool,
}

/// A boolean toggle embedded in the generated project's configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpec {
    pub key: String,
    pub label: String,
    #[serde(default = "default_yes")]
    pub yes: String,
    #[serde(default = "default_no")]
    pub no: String,
    #[serde(default = "default_true")]
    pub default: bool,
    /// Summary value when enabled.
    #[serde(default = "default_shown_on")]
    pub shown_on: String,
    /// Summary value when disabled.
    #[serde(default = "default_shown_off")]
    pub shown_off: String,
    pub file: String,
    /// Literal configuration entry as shipped when enabled.
    pub enabled_entry: String,
    /// Literal entry written when the user disables the flag.
    pub disabled_entry: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryColorSpec {
    pub file: String,
    /// Literal default marker, e.g. `"VITRON_PRIMARY_COLOR": "default"`.
    pub marker: String,
    /// Replacement; `{color}` is expanded with the user's value.
    pub replacement: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconTargets {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub ico: Vec<String>,
    #[serde(default)]
    pub icns: Option<String>,
    #[serde(default)]
    pub png: Vec<String>,
    #[serde(default = "default_png_size")]
    pub png_size: u32,
    #[serde(default = "default_ico_sizes")]
    pub ico_sizes: Vec<u32>,
    #[serde(default = "default_icns_sizes")]
    pub icns_sizes: Vec<u32>,
}

impl FeatureSpec {
    pub fn shown(&self, enabled: bool) -> &str {
        if enabled { &self.shown_on } else { &self.shown_off }
    }
}

impl RuleSpec {
    pub fn is_token_rule(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Short name for diagnostics.
    pub fn label(&self) -> String {
        if self.is_token_rule() {
            self.tokens.keys().cloned().collect::<Vec<_>>().join("|")
        } else {
            self.pattern.clone()
        }
    }
}

impl Default for IconTargets {
    fn default() -> Self {
        Self {
            source: default_source(),
            ico: Vec::new(),
            icns: None,
            png: Vec::new(),
            png_size: default_png_size(),
            ico_sizes: default_ico_sizes(),
            icns_sizes: default_icns_sizes(),
        }
    }
}

/// Content of the summary screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsSpec {
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub commands: Vec<CommandRow>,
    #[serde(default = "default_install_command")]
    pub install: String,
    #[serde(default = "default_start_command")]
    pub start: String,
}

impl Default for DocsSpec {
    fn default() -> Self {
        Self {
            tagline: String::new(),
            commands: Vec::new(),
            install: default_install_command(),
            start: default_start_command(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandRow {
    pub stage: String,
    pub app: String,
    pub web: String,
}

fn default_yes() -> String {
    "Yes".to_string()
}

fn default_no() -> String {
    "No".to_string()
}

fn default_shown_on() -> String {
    "yes".to_string()
}

fn default_shown_off() -> String {
    "no".to_string()
}

fn default_true() -> bool {
    true
}

fn default_source() -> String {
    "icon.png".to_string()
}

fn default_png_size() -> u32 {
    256
}

fn default_ico_sizes() -> Vec<u32> {
    vec![16, 24, 32, 48, 64, 128, 256]
}

fn default_icns_sizes() -> Vec<u32> {
    vec![16, 32, 128, 256, 512]
}

fn default_install_command() -> String {
    "yarn".to_string()
}

fn default_start_command() -> String {
    "yarn dev".to_string()
}

impl TemplateVariant {
    /// Parse a single variant document.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let variant: TemplateVariant = toml::from_str(content)?;
        variant.validate()?;
        Ok(variant)
    }

    pub fn feature(&self, key: &str) -> Option<&FeatureSpec> {
        self.features.iter().find(|feature| feature.key == key)
    }

    fn invalid(&self, details: impl Into<String>) -> AppError {
        AppError::InvalidTemplate { template: self.id.clone(), details: details.into() }
    }

    /// Reject variants whose rules could never be applied.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id must not be empty"));
        }
        if self.repository.trim().is_empty() {
            return Err(self.invalid("repository must not be empty"));
        }
        if self.display_token.is_empty() || self.identifier_token.is_empty() {
            return Err(self.invalid("placeholder tokens must not be empty"));
        }

        for rule in &self.rules {
            if rule.files.is_empty() {
                return Err(self.invalid(format!("rule '{}' has no target files", rule.label())));
            }
            if rule.is_token_rule() {
                if !rule.pattern.is_empty() || !rule.replacement.is_empty() {
                    return Err(self.invalid(format!(
                        "rule '{}' mixes tokens with pattern/replacement",
                        rule.label()
                    )));
                }
                if rule.tokens.keys().any(|token| token.is_empty()) {
                    return Err(self.invalid("rule tokens must not be empty"));
                }
                continue;
            }
            if rule.pattern.is_empty() {
                return Err(self.invalid("rule needs a pattern or a tokens table"));
            }
            Regex::new(&rule.pattern).map_err(|source| AppError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            })?;
        }

        let mut keys: Vec<&str> = self.features.iter().map(|f| f.key.as_str()).collect();
        keys.sort_unstable();
        if let Some(pair) = keys.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(self.invalid(format!("duplicate feature '{}'", pair[0])));
        }

        if self.icon.png_size == 0 {
            return Err(self.invalid("icon.png_size must be positive"));
        }
        if let Some(size) = self.icon.ico_sizes.iter().find(|s| **s == 0 || **s > 256) {
            return Err(self.invalid(format!("ICO size {} is outside 1..=256", size)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
id = "minimal"
title = "Minimal"
repository = "https://example.com/minimal"
display_token = "Vitron"
identifier_token = "vitron"

[[rules]]
files = ["package.json"]
pattern = "Vitron"
replacement = "{name}"

[[features]]
key = "tray"
label = "Tray"
file = "package.json"
enabled_entry = '"VITRON_TRAY": true'
disabled_entry = '"VITRON_TRAY": false'
"#;

    #[test]
    fn parses_minimal_variant_with_defaults() {
        let variant = TemplateVariant::from_toml(MINIMAL).expect("variant should parse");
        assert_eq!(variant.branch, None);
        assert_eq!(variant.rules.len(), 1);
        assert!(!variant.rules[0].optional);

        let tray = variant.feature("tray").expect("tray feature");
        assert!(tray.default);
        assert_eq!(tray.yes, "Yes");
        assert_eq!(tray.shown(true), "yes");
        assert_eq!(tray.shown(false), "no");

        assert_eq!(variant.icon.source, "icon.png");
        assert_eq!(variant.icon.png_size, 256);
        assert_eq!(variant.docs.start, "yarn dev");
    }

    #[test]
    fn rejects_invalid_rule_pattern() {
        let content = MINIMAL.replace("pattern = \"Vitron\"", "pattern = \"(Vitron\"");
        let err = TemplateVariant::from_toml(&content).expect_err("pattern should fail");
        assert!(matches!(err, AppError::InvalidPattern { .. }));
    }

    #[test]
    fn rejects_duplicate_feature_keys() {
        let duplicated = format!(
            "{}\n[[features]]\nkey = \"tray\"\nlabel = \"Again\"\nfile = \"package.json\"\n\
             enabled_entry = \"a\"\ndisabled_entry = \"b\"\n",
            MINIMAL
        );
        let err = TemplateVariant::from_toml(&duplicated).expect_err("duplicate should fail");
        assert!(err.to_string().contains("duplicate feature 'tray'"));
    }

    #[test]
    fn parses_token_rule() {
        let content = MINIMAL.replace(
            "pattern = \"Vitron\"\nreplacement = \"{name}\"",
            "tokens = { Vitron = \"{name}\", vitron = \"{id}\" }",
        );
        let variant = TemplateVariant::from_toml(&content).expect("token rule should parse");
        let rule = &variant.rules[0];
        assert!(rule.is_token_rule());
        assert_eq!(rule.tokens.get("vitron").map(String::as_str), Some("{id}"));
        assert_eq!(rule.label(), "Vitron|vitron");
    }

    #[test]
    fn rejects_token_rule_with_pattern() {
        let content = MINIMAL.replace(
            "replacement = \"{name}\"",
            "tokens = { vitron = \"{id}\" }",
        );
        let err = TemplateVariant::from_toml(&content).expect_err("mixed rule should fail");
        assert!(err.to_string().contains("mixes tokens"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let content = format!("unexpected = 1\n{}", MINIMAL);
        assert!(TemplateVariant::from_toml(&content).is_err());
    }
}
