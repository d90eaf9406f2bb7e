use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag};
use raylib::prelude::*;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Correction {
    RotateCw,
    RotateCcw,
    FlipHorizontal,
    FlipVertical,
}

/// Steps that undo an EXIF orientation tag (1..=8).
fn corrections(orientation: u32) -> &'static [Correction] {
    use Correction::*;
    match orientation {
        2 => &[FlipHorizontal],
        3 => &[RotateCw, RotateCw],
        4 => &[FlipVertical],
        5 => &[RotateCw, FlipHorizontal],
        6 => &[RotateCw],
        7 => &[RotateCw, FlipVertical],
        8 => &[RotateCcw],
        _ => &[],
    }
}

fn read_orientation(image_path: &Path, bytes: &[u8]) -> u32 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Loads an image file into a texture, upright according to its EXIF tag.
pub fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, image_path: &Path) -> Result<Texture2D> {
    let bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF orientation is only reliable in JPEG files
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    for step in corrections(orientation) {
        match step {
            Correction::RotateCw => image.rotate_cw(),
            Correction::RotateCcw => image.rotate_ccw(),
            Correction::FlipHorizontal => image.flip_horizontal(),
            Correction::FlipVertical => image.flip_vertical(),
        }
    }
    if orientation != 1 {
        debug!(path = %image_path.display(), orientation, "applied EXIF orientation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))
}
