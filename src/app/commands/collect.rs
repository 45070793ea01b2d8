//! Interactive question sequence producing a `ScaffoldRequest`.

use crate::domain::{AppError, FeatureSpec, ScaffoldRequest, TemplateCatalog};
use crate::ports::{Choice, Prompter};

pub const NAME_PROMPT: &str = "Name:";
pub const TEMPLATE_PROMPT: &str = "Template:";
pub const COLOR_PROMPT: &str = "Primary color (empty for default):";
pub const ICON_PROMPT: &str = "Use custom icon.png:";
pub const INSTALL_PROMPT: &str = "Install Node Modules:";

const YES: usize = 0;

fn feature_choices(feature: &FeatureSpec) -> [Choice; 2] {
    [Choice::new("Yes", &feature.yes), Choice::new("No", &feature.no)]
}

/// `[No, Yes]` question; cancellation counts as "No".
fn ask_no_yes<P: Prompter>(
    prompter: &P,
    prompt: &str,
    no: &str,
    yes: &str,
) -> Result<bool, AppError> {
    let choices = [Choice::new("No", no), Choice::new("Yes", yes)];
    Ok(prompter.select(prompt, &choices, 0)? == Some(1))
}

/// Ask every question. `Ok(None)` when the user cancelled a blocking step.
pub fn collect<P: Prompter>(
    prompter: &P,
    catalog: &TemplateCatalog,
) -> Result<Option<ScaffoldRequest>, AppError> {
    let Some(name) = prompter.text(NAME_PROMPT)? else {
        return Ok(None);
    };
    if name.trim().is_empty() {
        return Ok(None);
    }

    let templates: Vec<Choice> = catalog
        .variants()
        .iter()
        .map(|variant| Choice::new(&variant.title, &variant.description))
        .collect();
    let Some(index) = prompter.select(TEMPLATE_PROMPT, &templates, 0)? else {
        return Ok(None);
    };
    let variant = &catalog.variants()[index];

    let mut request = ScaffoldRequest::new(name, &variant.id);

    for feature in &variant.features {
        let default = if feature.default { YES } else { YES + 1 };
        let Some(choice) = prompter.select(&feature.label, &feature_choices(feature), default)?
        else {
            return Ok(None);
        };
        request.features.insert(feature.key.clone(), choice == YES);
    }

    if variant.primary_color.is_some() {
        let Some(color) = prompter.text(COLOR_PROMPT)? else {
            return Ok(None);
        };
        request.primary_color = color.trim().to_string();
    }

    request.use_custom_icon = ask_no_yes(prompter, ICON_PROMPT, "No", "Yes")?;
    request.install_dependencies = ask_no_yes(
        prompter,
        INSTALL_PROMPT,
        "No just scaffold the app",
        "Yes (this will take time)",
    )?;

    log::debug!("collected {:?}", request);
    Ok(Some(request))
}

/// Ask the user to drop `icon.png` into the project. `true` to convert.
pub fn confirm_icon_placed<P: Prompter>(
    prompter: &P,
    project_name: &str,
) -> Result<bool, AppError> {
    let prompt = format!("Place squared icon.png in ./{}:", project_name);
    let choices = [
        Choice::new("Confirm", format!("Placed icon.png inside of {}", project_name)),
        Choice::new("Cancel", "Continue without custom icon"),
    ];
    Ok(prompter.select(&prompt, &choices, 0)? == Some(0))
}
