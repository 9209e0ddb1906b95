//! Fixed-capacity palette produced by median cut.

use super::size::PaletteSize;
use crate::color::Rgb;

/// An ordered palette with exactly `size` entries.
///
/// Entries appear in the order their leaf boxes were emitted. Slots that no
/// leaf filled hold [`Rgb::BLACK`]; [`filled()`](Palette::filled) tells how
/// many entries came from the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    filled: usize,
}

impl Palette {
    /// Build a palette from emitted leaf colors, padding with black up to `size`.
    ///
    /// Leaves beyond `size` are dropped; the partitioner never produces them.
    ///
    /// ```
    /// use median_cut::{Palette, PaletteSize, Rgb};
    ///
    /// let palette = Palette::from_leaves(vec![Rgb::new(9, 9, 9)], PaletteSize::new(4).unwrap());
    /// assert_eq!(palette.len(), 4);
    /// assert_eq!(palette.filled(), 1);
    /// assert_eq!(palette.get(3), Some(Rgb::BLACK));
    /// ```
    pub fn from_leaves(mut leaves: Vec<Rgb>, size: PaletteSize) -> Self {
        leaves.truncate(size.get());
        let filled = leaves.len();
        leaves.resize(size.get(), Rgb::BLACK);
        Self {
            colors: leaves,
            filled,
        }
    }

    /// All palette entries, in emission order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Entry at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Palette capacity (the requested size).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for palettes built from a [`PaletteSize`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of entries that came from leaf boxes rather than padding.
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Entries as flat `[R, G, B, ...]` bytes (PNG `PLTE` layout).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }
}
