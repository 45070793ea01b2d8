//! Boxed summary screen printed after a run and by `--docs`.

use console::{Alignment, pad_str, style};

use crate::app::commands::scaffold::ScaffoldSummary;
use crate::domain::{FeatureSpec, TemplateVariant};

const WIDTH: usize = 39;
const STAGE_WIDTH: usize = 9;
const COLUMN_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 12;

/// Choices shown on the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub name: String,
    /// `(row label, shown value)` per feature, in schema order.
    pub features: Vec<(String, String)>,
    pub custom_icon: bool,
    /// `None` when the variant has no color marker.
    pub color: Option<String>,
    pub installed: bool,
}

impl SummaryView {
    /// The screen as it looks before any choice is made.
    pub fn defaults(variant: &TemplateVariant) -> Self {
        Self {
            name: variant.display_token.clone(),
            features: variant
                .features
                .iter()
                .map(|feature| feature_row(feature, feature.default))
                .collect(),
            custom_icon: false,
            color: variant.primary_color.as_ref().map(|_| String::new()),
            installed: false,
        }
    }

    pub fn from_run(variant: &TemplateVariant, summary: &ScaffoldSummary) -> Self {
        let request = &summary.request;
        Self {
            name: request.project_name.clone(),
            features: variant
                .features
                .iter()
                .map(|feature| {
                    feature_row(feature, request.feature_enabled(&feature.key, feature.default))
                })
                .collect(),
            custom_icon: summary.icon.is_custom(),
            color: variant.primary_color.as_ref().map(|_| request.primary_color.clone()),
            installed: summary.package_manager.is_some(),
        }
    }
}

/// `tray` -> `Tray`.
fn row_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn feature_row(feature: &FeatureSpec, enabled: bool) -> (String, String) {
    (row_label(&feature.key), feature.shown(enabled).to_string())
}

fn border(left: &str, join: &str, right: &str, columns: &[usize]) -> String {
    let segments: Vec<String> = columns.iter().map(|width| "─".repeat(*width)).collect();
    format!("{}{}{}", left, segments.join(join), right)
}

fn boxed(content: &str, align: Alignment) -> String {
    format!("│{}│", pad_str(content, WIDTH, align, Some("…")))
}

fn choice_row(label: &str, value: &str) -> String {
    let label = format!("{}:", label.trim_end_matches(':'));
    let content = format!(
        "  {}{}",
        pad_str(&label, LABEL_WIDTH, Alignment::Left, None),
        style(value).yellow().bold()
    );
    boxed(&content, Alignment::Left)
}

fn command_row(stage: &str, app: &str, web: &str) -> String {
    let cell = |text: String, width: usize| {
        pad_str(&text, width, Alignment::Left, Some("…")).into_owned()
    };
    format!(
        "│{}│{}│{}│",
        cell(format!("  {}", stage), STAGE_WIDTH),
        cell(format!("  {}", style(app).yellow().bold()), COLUMN_WIDTH),
        cell(format!("  {}", style(web).yellow().bold()), COLUMN_WIDTH),
    )
}

/// Render the summary for `variant`.
pub fn render(variant: &TemplateVariant, view: &SummaryView) -> String {
    let columns = [STAGE_WIDTH, COLUMN_WIDTH, COLUMN_WIDTH];
    let mut lines = Vec::new();

    lines.push(border("┌", "", "┐", &[WIDTH]));
    let welcome = style(format!("Welcome to {}", variant.display_token)).red().bold().to_string();
    lines.push(boxed(&welcome, Alignment::Center));
    if !variant.docs.tagline.is_empty() {
        lines.push(boxed(&style(&variant.docs.tagline).dim().to_string(), Alignment::Center));
    }
    lines.push(border("├", "", "┤", &[WIDTH]));

    lines.push(choice_row("Name", &view.name));
    for (label, shown) in &view.features {
        lines.push(choice_row(label, shown));
    }
    lines.push(choice_row("Icon", if view.custom_icon { "custom" } else { "default" }));
    if let Some(color) = &view.color {
        let color = if color.trim().is_empty() { "default" } else { color.as_str() };
        lines.push(choice_row("Color", color));
    }

    if variant.docs.commands.is_empty() {
        lines.push(border("└", "", "┘", &[WIDTH]));
    } else {
        lines.push(border("├", "┬", "┤", &columns));
        lines.push(format!(
            "│{}│{}│{}│",
            " ".repeat(STAGE_WIDTH),
            pad_str("APP", COLUMN_WIDTH, Alignment::Center, None),
            pad_str("WEB", COLUMN_WIDTH, Alignment::Center, None),
        ));
        lines.push(border("├", "┼", "┤", &columns));
        for row in &variant.docs.commands {
            lines.push(command_row(&row.stage, &row.app, &row.web));
        }
        lines.push(border("└", "┴", "┘", &columns));
    }

    let mut out: Vec<String> = lines.into_iter().map(|line| format!("    {}", line)).collect();
    out.push(String::new());
    out.push("    To get started run:".to_string());
    out.push(String::new());
    for command in next_commands(variant, view) {
        out.push(format!("    {}", style(command).yellow().bold()));
    }
    out.join("\n")
}

/// Commands the user runs next, in order.
pub fn next_commands(variant: &TemplateVariant, view: &SummaryView) -> Vec<String> {
    let mut commands = vec![format!("cd {}", view.name)];
    if !view.installed {
        commands.push(variant.docs.install.clone());
    }
    commands.push(variant.docs.start.clone());
    commands
}
