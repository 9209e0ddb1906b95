//! MedianCutQuantizer -- the primary entry point for the crate.
//!
//! [`MedianCutQuantizer`] runs the whole core pipeline: copy the pixels into
//! a working array, build the palette by median cut, then map the untouched
//! source pixels onto it.

use super::error::QuantizeError;
use crate::color::Rgb;
use crate::output::{map_to_palette, QuantizedImage};
use crate::palette::{Palette, PaletteBuilder, PaletteSize};

/// Median-cut quantizer for a fixed palette size.
///
/// # Design
///
/// - Constructor requires a validated [`PaletteSize`] (no invalid states)
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   reused across images
/// - The caller's pixels are never reordered; partitioning works on a
///   private copy that is dropped once the palette exists
///
/// # Example
///
/// ```
/// use median_cut::{MedianCutQuantizer, PaletteSize, Rgb};
///
/// let pixels = vec![
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 0, 0),
/// ];
/// let quantizer = MedianCutQuantizer::new(PaletteSize::new(2).unwrap());
/// let image = quantizer.quantize(&pixels, 2, 2).unwrap();
///
/// assert_eq!(image.palette().colors(), &[Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)]);
/// assert_eq!(image.grid().indices(), &[0, 1, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MedianCutQuantizer {
    size: PaletteSize,
}

impl MedianCutQuantizer {
    /// Create a quantizer producing palettes of `size` entries.
    pub fn new(size: PaletteSize) -> Self {
        Self { size }
    }

    /// Change the palette size.
    #[inline]
    pub fn size(mut self, size: PaletteSize) -> Self {
        self.size = size;
        self
    }

    /// Configured palette size.
    #[inline]
    pub fn palette_size(&self) -> PaletteSize {
        self.size
    }

    /// Build only the palette for `pixels`.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::EmptyInput`] if `pixels` is empty.
    pub fn palette(&self, pixels: &[Rgb]) -> Result<Palette, QuantizeError> {
        let mut working = pixels.to_vec();
        PaletteBuilder::new(self.size).build(&mut working)
    }

    /// Quantize a `width` x `height` row-major image.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::EmptyInput`] if `pixels` is empty
    /// - [`QuantizeError::DimensionMismatch`] if `pixels.len() != width * height`
    pub fn quantize(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<QuantizedImage, QuantizeError> {
        if pixels.is_empty() {
            return Err(QuantizeError::EmptyInput);
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(QuantizeError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }

        let palette = self.palette(pixels)?;
        let grid = map_to_palette(pixels, width, height, &palette)?;
        Ok(QuantizedImage::new(palette, grid))
    }
}
