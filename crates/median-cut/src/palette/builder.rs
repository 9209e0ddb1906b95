//! Drives the partitioner to a finished palette.

use super::palette::Palette;
use super::size::PaletteSize;
use crate::api::QuantizeError;
use crate::color::Rgb;
use crate::partition::partition;

/// Builds a [`Palette`] of a fixed size from a working color array.
///
/// # Example
///
/// ```
/// use median_cut::{PaletteBuilder, PaletteSize, Rgb};
///
/// let mut working = vec![Rgb::new(200, 10, 50)];
/// let palette = PaletteBuilder::new(PaletteSize::new(1).unwrap())
///     .build(&mut working)
///     .unwrap();
///
/// assert_eq!(palette.colors(), &[Rgb::new(200, 10, 50)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PaletteBuilder {
    size: PaletteSize,
}

impl PaletteBuilder {
    /// Builder for palettes of `size` entries.
    pub fn new(size: PaletteSize) -> Self {
        Self { size }
    }

    /// Target palette size.
    pub fn size(&self) -> PaletteSize {
        self.size
    }

    /// Run median cut over all of `working` and pad the result to full size.
    ///
    /// `working` is reordered. Pass a copy if the original pixel order is
    /// still needed.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::EmptyInput`] if `working` is empty.
    pub fn build(&self, working: &mut [Rgb]) -> Result<Palette, QuantizeError> {
        if working.is_empty() {
            return Err(QuantizeError::EmptyInput);
        }
        let mut leaves = Vec::with_capacity(self.size.get());
        let end = working.len() - 1;
        partition(working, 0, end, self.size.depth(), &mut leaves)?;
        Ok(Palette::from_leaves(leaves, self.size))
    }
}
