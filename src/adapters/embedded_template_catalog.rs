use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateCatalog};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Load the template variants compiled into the binary, ordered by file name.
pub fn load() -> Result<TemplateCatalog, AppError> {
    let mut files: Vec<_> = TEMPLATES_DIR
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::config_error(format!(
                "Embedded template {} is not valid UTF-8",
                file.path().display()
            ))
        })?;
        documents.push(content);
    }

    TemplateCatalog::from_documents(documents)
}
