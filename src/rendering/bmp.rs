//! 8-bit indexed BMP encoder.
//!
//! Layout (all multi-byte fields little-endian unless noted):
//!
//! ```text
//! offset  size  field
//!      0     2  "BM"
//!      2     4  width * height            (big-endian placeholder)
//!      6     2  reserved = 0
//!      8     2  reserved = 0
//!     10     4  pixel data offset = 54 + 4 * colors
//!     14     4  info header size = 40
//!     18     4  width
//!     22     4  height
//!     26     2  planes = 1
//!     28     2  bits per pixel = 8
//!     30     4  compression = 0
//!     34     4  image size = 0
//!     38     4  x resolution = width
//!     42     4  y resolution = height
//!     46     4  colors used
//!     50     4  important colors
//!     54  4*n   color table, B G R 0 per entry
//!      …        rows bottom-to-top, one index byte per pixel, unpadded
//! ```
//!
//! The file-size field and the resolution fields are kept as the reference
//! output writes them so files compare byte-for-byte.

use median_cut::QuantizedImage;
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Size of the file header plus the info header
pub const HEADER_LEN: usize = 54;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 8;

/// Byte offset of the first pixel row for a palette of `colors` entries
pub fn pixel_data_offset(colors: usize) -> usize {
    HEADER_LEN + 4 * colors
}

/// Width, height and pixel count as the header's `u32` fields
fn header_dimensions(width: usize, height: usize) -> Result<(u32, u32, u32), AppError> {
    let too_large = || AppError::ImageTooLarge { width, height };
    let pixels = width.checked_mul(height).ok_or_else(too_large)?;
    Ok((
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
        u32::try_from(pixels).map_err(|_| too_large())?,
    ))
}

/// Encode a quantized image as an indexed BMP in memory
pub fn encode_bmp(image: &QuantizedImage) -> Result<Vec<u8>, AppError> {
    let (width, height, pixels) = header_dimensions(image.width(), image.height())?;
    let colors = image.palette().colors();
    let offset = pixel_data_offset(colors.len());

    let mut out = Vec::with_capacity(offset + image.grid().indices().len());

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&pixels.to_be_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(offset as u32).to_le_bytes());
    debug_assert_eq!(out.len(), FILE_HEADER_LEN);

    // Info header
    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&(colors.len() as u32).to_le_bytes());
    out.extend_from_slice(&(colors.len() as u32).to_le_bytes());
    debug_assert_eq!(out.len(), HEADER_LEN);

    // Color table
    for color in colors {
        out.extend_from_slice(&[color.b(), color.g(), color.r(), 0]);
    }

    // Pixel rows, bottom row first
    for row in image.grid().rows().rev() {
        out.extend_from_slice(row);
    }

    Ok(out)
}

/// Encode and write a BMP file
pub fn write_bmp(path: &Path, image: &QuantizedImage) -> Result<usize, AppError> {
    let bytes = encode_bmp(image)?;
    fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote BMP");
    Ok(bytes.len())
}
