//! Convert a square `icon.png` into the platform icon formats a template expects.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use icns::{IconFamily, PixelFormat};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::domain::{AppError, IconTargets};

/// Files produced by a conversion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconArtifacts {
    pub ico: Vec<PathBuf>,
    pub icns: Option<PathBuf>,
    pub png: Vec<PathBuf>,
    /// PNG targets whose directory this template revision does not ship.
    pub skipped: Vec<String>,
}

/// Generate icons from `<project>/<targets.source>` and delete the source on success.
pub fn convert(project: &Path, targets: &IconTargets) -> Result<IconArtifacts, AppError> {
    let source = project.join(&targets.source);
    if !source.is_file() {
        return Err(AppError::IconMissing(source.display().to_string()));
    }

    let bytes = fs::read(&source).map_err(|err| AppError::file_access(&source, err))?;
    let image = image::load_from_memory(&bytes)?;
    if image.width() != image.height() {
        return Err(AppError::IconNotSquare { width: image.width(), height: image.height() });
    }
    log::info!("converting {}x{} icon from {}", image.width(), image.height(), source.display());

    let mut artifacts = IconArtifacts::default();

    if !targets.ico.is_empty() {
        let ico = encode_ico(&image, &targets.ico_sizes)?;
        for relative in &targets.ico {
            artifacts.ico.push(write_creating_parent(project, relative, &ico)?);
        }
    }

    if let Some(relative) = &targets.icns {
        let icns = encode_icns(&image, &targets.icns_sizes)?;
        artifacts.icns = Some(write_creating_parent(project, relative, &icns)?);
    }

    if !targets.png.is_empty() {
        let png = encode_png(&image, targets.png_size)?;
        for relative in &targets.png {
            let path = project.join(relative);
            if !path.parent().is_some_and(Path::is_dir) {
                log::debug!("no directory for {}, keeping template default", relative);
                artifacts.skipped.push(relative.clone());
                continue;
            }
            fs::write(&path, &png).map_err(|err| AppError::file_access(&path, err))?;
            artifacts.png.push(path);
        }
    }

    fs::remove_file(&source).map_err(|err| AppError::file_access(&source, err))?;
    Ok(artifacts)
}

fn write_creating_parent(
    project: &Path,
    relative: &str,
    bytes: &[u8],
) -> Result<PathBuf, AppError> {
    let path = project.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| AppError::file_access(parent, err))?;
    }
    fs::write(&path, bytes).map_err(|err| AppError::file_access(&path, err))?;
    Ok(path)
}

fn square_rgba(image: &DynamicImage, size: u32) -> Vec<u8> {
    image.resize_exact(size, size, FilterType::Lanczos3).to_rgba8().into_raw()
}

/// Multi-resolution Windows icon.
pub fn encode_ico(image: &DynamicImage, sizes: &[u32]) -> Result<Vec<u8>, AppError> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let icon = IconImage::from_rgba_data(size, size, square_rgba(image, size));
        dir.add_entry(IconDirEntry::encode(&icon)?);
    }

    let mut buffer = Vec::new();
    dir.write(&mut buffer)?;
    Ok(buffer)
}

/// macOS icon family.
pub fn encode_icns(image: &DynamicImage, sizes: &[u32]) -> Result<Vec<u8>, AppError> {
    let mut family = IconFamily::new();
    for &size in sizes {
        let icon = icns::Image::from_data(PixelFormat::RGBA, size, size, square_rgba(image, size))?;
        family.add_icon(&icon).map_err(|err| {
            io::Error::new(err.kind(), format!("ICNS has no {}px slot: {}", size, err))
        })?;
    }

    let mut buffer = Vec::new();
    family.write(&mut buffer)?;
    Ok(buffer)
}

/// PNG scaled to fit `size`, aspect ratio kept.
pub fn encode_png(image: &DynamicImage, size: u32) -> Result<Vec<u8>, AppError> {
    let resized = image.resize(size, size, FilterType::Lanczos3);
    let mut buffer = Cursor::new(Vec::new());
    resized.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
