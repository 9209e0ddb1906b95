//! Raw RGB pixel source
//!
//! Raw files are headerless: interleaved 8-bit R, G, B samples in row-major
//! order. Width and height come from the file name (see [`RawImageSpec`]).

use median_cut::Rgb;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::RawImageSpec;

/// A fully loaded raw image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub spec: RawImageSpec,
    pub pixels: Vec<Rgb>,
}

impl RawImage {
    pub fn width(&self) -> usize {
        self.spec.width
    }

    pub fn height(&self) -> usize {
        self.spec.height
    }
}

/// Decode interleaved RGB bytes for an image described by `spec`
pub fn decode_raw(spec: &RawImageSpec, bytes: &[u8]) -> Result<Vec<Rgb>, AppError> {
    if bytes.len() != spec.byte_len() {
        return Err(AppError::PixelCountMismatch {
            path: spec.path.clone(),
            width: spec.width,
            height: spec.height,
            expected: spec.byte_len(),
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(3)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect())
}

/// Read a raw image, taking its dimensions from the file name
pub fn read_raw(path: &Path) -> Result<RawImage, AppError> {
    let spec = RawImageSpec::from_path(path)?;
    let bytes = fs::read(path)?;
    let pixels = decode_raw(&spec, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = spec.width,
        height = spec.height,
        "Read raw image"
    );
    Ok(RawImage { spec, pixels })
}

/// Resolve the input argument to a list of raw files.
///
/// A file is returned as-is. A directory yields its `*.raw` entries sorted
/// by name; an empty result is [`AppError::NoInputs`].
pub fn discover_inputs(path: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        let is_raw = entry_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("raw"));
        if is_raw && entry_path.is_file() {
            inputs.push(entry_path);
        }
    }
    inputs.sort();

    if inputs.is_empty() {
        return Err(AppError::NoInputs(path.to_path_buf()));
    }
    tracing::info!(dir = %path.display(), count = inputs.len(), "Found raw images");
    Ok(inputs)
}
