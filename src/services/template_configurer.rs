//! Ordered find-and-replace over a freshly cloned template tree.
//!
//! Rules are applied strictly in sequence because several rules may target
//! the same file and their substitutions compose textually. Files a template
//! revision does not ship are skipped; a rule whose files are all absent is a
//! no-op.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ReplacementRule};

/// What a configuration pass changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigureReport {
    /// Project-relative paths rewritten at least once, in first-write order.
    pub files_written: Vec<String>,
    /// Patterns of non-optional rules that found target files but matched nothing.
    pub unmatched_rules: Vec<String>,
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|err| AppError::file_access(path, err))
}

/// Apply `rules` in order to the files under `project`.
pub fn configure(project: &Path, rules: &[ReplacementRule]) -> Result<ConfigureReport, AppError> {
    let mut report = ConfigureReport::default();

    for rule in rules {
        let mut present = 0usize;
        let mut matched = false;

        for file in &rule.files {
            let path = project.join(file);
            if !path.is_file() {
                log::debug!("{} not present, skipping /{}/", file, rule.pattern);
                continue;
            }
            present += 1;

            let content = read(&path)?;
            if !rule.pattern.is_match(&content) {
                continue;
            }
            matched = true;

            let updated = rule.apply(&content);
            if updated.as_ref() == content.as_str() {
                continue;
            }
            fs::write(&path, updated.as_bytes())
                .map_err(|err| AppError::file_access(&path, err))?;
            if !report.files_written.iter().any(|written| written == file) {
                report.files_written.push(file.clone());
            }
        }

        if present > 0 && !matched {
            if rule.optional {
                log::debug!("optional rule /{}/ matched nothing", rule.pattern);
            } else {
                log::warn!("rule /{}/ matched nothing in {:?}", rule.pattern, rule.files);
                report.unmatched_rules.push(rule.pattern.as_str().to_string());
            }
        }
    }

    Ok(report)
}

/// Targeted files that still contain any of `tokens` outside the `inserted` values.
pub fn residual_tokens(
    project: &Path,
    rules: &[ReplacementRule],
    tokens: &[&str],
    inserted: &[&str],
) -> Result<Vec<String>, AppError> {
    let mut files: Vec<&String> = rules.iter().flat_map(|rule| rule.files.iter()).collect();
    files.sort();
    files.dedup();

    let mut residual = Vec::new();
    for file in files {
        let path = project.join(file);
        if !path.is_file() {
            continue;
        }
        let content = inserted
            .iter()
            .filter(|value| !value.is_empty())
            .fold(read(&path)?, |content, value| content.replace(value, "\u{0}"));
        if tokens.iter().any(|token| content.contains(token)) {
            residual.push(file.clone());
        }
    }
    Ok(residual)
}
