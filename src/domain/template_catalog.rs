use crate::domain::{AppError, TemplateVariant};

/// Ordered set of template variants offered by the template question.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    variants: Vec<TemplateVariant>,
}

impl TemplateCatalog {
    pub fn new(variants: Vec<TemplateVariant>) -> Result<Self, AppError> {
        if variants.is_empty() {
            return Err(AppError::config_error("Template catalog is empty"));
        }
        for (index, variant) in variants.iter().enumerate() {
            if variants[..index].iter().any(|other| other.id == variant.id) {
                return Err(AppError::InvalidTemplate {
                    template: variant.id.clone(),
                    details: "duplicate template id".to_string(),
                });
            }
        }
        Ok(Self { variants })
    }

    /// Parse one TOML document per variant, keeping the given order.
    pub fn from_documents<'a, I>(documents: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let variants =
            documents.into_iter().map(TemplateVariant::from_toml).collect::<Result<Vec<_>, _>>()?;
        Self::new(variants)
    }

    pub fn variants(&self) -> &[TemplateVariant] {
        &self.variants
    }

    pub fn get(&self, id: &str) -> Result<&TemplateVariant, AppError> {
        self.variants
            .iter()
            .find(|variant| variant.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
    }

    /// Variant used when no choice has been made (e.g. `--docs`).
    pub fn default_variant(&self) -> &TemplateVariant {
        &self.variants[0]
    }
}
