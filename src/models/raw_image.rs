use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::AppError;

/// `<W>x<H>` anywhere in a file stem, e.g. `mandrill_512x512`
static DIMENSIONS: OnceLock<Regex> = OnceLock::new();

fn dimensions_pattern() -> &'static Regex {
    DIMENSIONS.get_or_init(|| Regex::new(r"(\d+)[xX](\d+)").expect("dimension pattern is valid"))
}

/// A raw image file whose dimensions are encoded in its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageSpec {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl RawImageSpec {
    /// Read width and height from the last `<W>x<H>` token of the file stem.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidFileName(path.to_path_buf());
        let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
        let caps = dimensions_pattern()
            .captures_iter(stem)
            .last()
            .ok_or_else(invalid)?;

        let width: usize = caps[1].parse().map_err(|_| invalid())?;
        let height: usize = caps[2].parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        // The BMP header stores width * height in a u32
        let pixels = width
            .checked_mul(height)
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or_else(invalid)?;
        pixels.checked_mul(3).ok_or_else(invalid)?;

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    /// Number of pixels in the image
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Expected file size in bytes (3 bytes per pixel)
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * 3
    }

    /// File stem used to name outputs
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }
}
