//! Indexed PNG preview of a quantized image.
//!
//! The BMP output keeps the unpadded row layout, which some viewers reject
//! for widths that are not a multiple of four. The preview carries the same
//! palette and indices in a PNG container.

use median_cut::QuantizedImage;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;

/// Encode as an 8-bit indexed PNG
pub fn encode_png(image: &QuantizedImage) -> Result<Vec<u8>, AppError> {
    let too_large = || AppError::ImageTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let plte = image.palette().to_rgb_bytes();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.grid().indices())
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write a PNG preview
pub fn write_png(path: &Path, image: &QuantizedImage) -> Result<usize, AppError> {
    let bytes = encode_png(image)?;
    fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG preview");
    Ok(bytes.len())
}
