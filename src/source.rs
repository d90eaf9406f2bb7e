use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read manifest {}: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid manifest {}: {source}", path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One hero image, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEntry {
    pub title: String,
    pub image: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "slide")]
    slides: Vec<ManifestSlide>,
}

#[derive(Debug, Deserialize)]
struct ManifestSlide {
    title: String,
    image: PathBuf,
    #[serde(default)]
    order: u32,
    #[serde(default = "default_is_active")]
    is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Finds the slides behind `source`: an image directory or a TOML manifest.
///
/// A missing source means there is no slider, which is not an error.
pub fn discover(source: &Path) -> Result<Vec<SlideEntry>, SourceError> {
    if !source.exists() {
        debug!(source = %source.display(), "no slide source");
        return Ok(Vec::new());
    }

    if source.is_dir() {
        load_directory(source)
    } else {
        load_manifest(source)
    }
}

/// Every image file in `dir`, sorted by file name.
pub fn load_directory(dir: &Path) -> Result<Vec<SlideEntry>, SourceError> {
    let read_err = |source| SourceError::ReadDir { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths
        .into_iter()
        .map(|image| SlideEntry {
            title: image
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            image,
        })
        .collect())
}

pub fn load_manifest(path: &Path) -> Result<Vec<SlideEntry>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or(Path::new(""));
    parse_manifest(&text, base).map_err(|source| SourceError::ParseManifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Active slides ordered by `order`, ties kept in declaration order.
pub fn parse_manifest(text: &str, base: &Path) -> Result<Vec<SlideEntry>, toml::de::Error> {
    let manifest: Manifest = toml::from_str(text)?;

    let mut slides: Vec<ManifestSlide> = manifest
        .slides
        .into_iter()
        .filter(|slide| slide.is_active)
        .collect();
    // Stable sort keeps declaration order for equal `order` values
    slides.sort_by_key(|slide| slide.order);

    Ok(slides
        .into_iter()
        .map(|slide| SlideEntry {
            title: slide.title,
            image: base.join(slide.image),
        })
        .collect())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
