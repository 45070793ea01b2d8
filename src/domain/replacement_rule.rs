use std::borrow::Cow;
use std::collections::HashMap;

use regex::{Captures, NoExpand, Regex};

use crate::domain::template_variant::VARIABLES_PATTERN;
use crate::domain::{AppError, ScaffoldRequest, TemplateVariant};

/// What a match is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted literally; no capture-group expansion.
    Literal(String),
    /// Whole match looked up; unknown matches are kept.
    Lookup(HashMap<String, String>),
}

/// A single find-and-replace step over a set of project-relative files.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub files: Vec<String>,
    pub pattern: Regex,
    pub replacement: Replacement,
    pub optional: bool,
}

fn compile(pattern: &str) -> Result<Regex, AppError> {
    Regex::new(pattern)
        .map_err(|source| AppError::InvalidPattern { pattern: pattern.to_string(), source })
}

impl ReplacementRule {
    pub fn new(files: Vec<String>, pattern: &str, replacement: String) -> Result<Self, AppError> {
        Ok(Self {
            files,
            pattern: compile(pattern)?,
            replacement: Replacement::Literal(replacement),
            optional: false,
        })
    }

    /// Rule matching `needle` verbatim.
    pub fn literal(
        files: Vec<String>,
        needle: &str,
        replacement: String,
    ) -> Result<Self, AppError> {
        Self::new(files, &regex::escape(needle), replacement)
    }

    /// Rule substituting every `(token, value)` pair in one scan.
    ///
    /// Values are also matched and kept as they are, so text already
    /// rewritten by an earlier run is left alone. At any position the
    /// longest candidate wins.
    pub fn tokens(files: Vec<String>, pairs: &[(String, String)]) -> Result<Self, AppError> {
        let mut lookup = HashMap::new();
        for (_, value) in pairs {
            if !value.is_empty() {
                lookup.insert(value.clone(), value.clone());
            }
        }
        for (token, value) in pairs {
            lookup.insert(token.clone(), value.clone());
        }

        let mut candidates: Vec<&String> = lookup.keys().collect();
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation =
            candidates.iter().map(|c| regex::escape(c)).collect::<Vec<_>>().join("|");

        Ok(Self {
            files,
            pattern: compile(&alternation)?,
            replacement: Replacement::Lookup(lookup),
            optional: false,
        })
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Rewrite every match in `content`.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match &self.replacement {
            Replacement::Literal(text) => {
                self.pattern.replace_all(content, NoExpand(text.as_str()))
            }
            Replacement::Lookup(lookup) => {
                self.pattern.replace_all(content, |caps: &Captures| {
                    lookup.get(&caps[0]).cloned().unwrap_or_else(|| caps[0].to_string())
                })
            }
        }
    }
}

/// Expand `{name}`, `{id}` and `{color}` in one pass; inserted text is not rescanned.
fn expand(variables: &Regex, template: &str, request: &ScaffoldRequest) -> String {
    variables
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "name" => request.project_name.clone(),
            "id" => request.identifier(),
            _ => request.primary_color.trim().to_string(),
        })
        .into_owned()
}

/// Build the ordered rule list for `request`.
///
/// Order: the variant's unconditional table, then one rule per disabled
/// feature in schema order, then the primary color override.
pub fn build_rules(
    variant: &TemplateVariant,
    request: &ScaffoldRequest,
) -> Result<Vec<ReplacementRule>, AppError> {
    let variables = compile(VARIABLES_PATTERN)?;
    let mut rules = Vec::with_capacity(variant.rules.len() + variant.features.len() + 1);

    for spec in &variant.rules {
        let rule = if spec.is_token_rule() {
            let pairs: Vec<(String, String)> = spec
                .tokens
                .iter()
                .map(|(token, value)| (token.clone(), expand(&variables, value, request)))
                .collect();
            ReplacementRule::tokens(spec.files.clone(), &pairs)?
        } else {
            let replacement = expand(&variables, &spec.replacement, request);
            ReplacementRule::new(spec.files.clone(), &spec.pattern, replacement)?
        };
        rules.push(rule.optional(spec.optional));
    }

    for feature in &variant.features {
        if request.feature_enabled(&feature.key, feature.default) {
            continue;
        }
        rules.push(ReplacementRule::literal(
            vec![feature.file.clone()],
            &feature.enabled_entry,
            feature.disabled_entry.clone(),
        )?);
    }

    if let Some(color) = variant.primary_color.as_ref().filter(|_| request.has_primary_color()) {
        rules.push(ReplacementRule::literal(
            vec![color.file.clone()],
            &color.marker,
            expand(&variables, &color.replacement, request),
        )?);
    }

    Ok(rules)
}
