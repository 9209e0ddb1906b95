//! Nearest-color assignment of source pixels to palette entries.

use super::index_grid::IndexGrid;
use crate::api::QuantizeError;
use crate::color::Rgb;
use crate::palette::Palette;

/// Index of the palette entry closest to `color` by squared RGB distance.
///
/// On ties the lowest index wins: a later entry replaces the running best
/// only when it is strictly closer.
///
/// ```
/// use median_cut::{nearest_index, Palette, PaletteSize, Rgb};
///
/// let palette = Palette::from_leaves(
///     vec![Rgb::new(0, 0, 0), Rgb::new(100, 100, 100), Rgb::new(100, 100, 100)],
///     PaletteSize::new(4).unwrap(),
/// );
/// assert_eq!(nearest_index(Rgb::new(90, 90, 90), &palette), 1);
/// ```
pub fn nearest_index(color: Rgb, palette: &Palette) -> u8 {
    let mut best = 0usize;
    let mut best_distance = u32::MAX;
    for (i, &entry) in palette.colors().iter().enumerate() {
        let distance = color.distance_sq(entry);
        if distance < best_distance {
            best = i;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    // Palette sizes are capped at 256, so every index fits
    best as u8
}

/// Map every pixel of a `width` x `height` row-major image to its nearest
/// palette index.
///
/// Exact integer arithmetic, one full palette scan per pixel.
///
/// # Errors
///
/// [`QuantizeError::DimensionMismatch`] if `pixels.len() != width * height`.
pub fn map_to_palette(
    pixels: &[Rgb],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Result<IndexGrid, QuantizeError> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(QuantizeError::DimensionMismatch {
            len: pixels.len(),
            width,
            height,
        });
    }
    let indices = pixels
        .iter()
        .map(|&pixel| nearest_index(pixel, palette))
        .collect();
    Ok(IndexGrid::new(indices, width, height))
}
