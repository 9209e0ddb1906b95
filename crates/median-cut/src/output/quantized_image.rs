//! The finished result of a quantization run.

use super::index_grid::IndexGrid;
use crate::palette::Palette;

/// A palette plus the index grid that refers into it.
///
/// This is exactly what an indexed-color encoder needs: dimensions, palette
/// entries in order, and one index per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedImage {
    palette: Palette,
    grid: IndexGrid,
}

impl QuantizedImage {
    /// Pair a palette with an index grid.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every index is inside the palette.
    pub fn new(palette: Palette, grid: IndexGrid) -> Self {
        debug_assert!(
            grid.indices().iter().all(|&i| (i as usize) < palette.len()),
            "index grid refers past the end of a {}-entry palette",
            palette.len()
        );
        Self { palette, grid }
    }

    /// The palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The per-pixel palette indices.
    #[inline]
    pub fn grid(&self) -> &IndexGrid {
        &self.grid
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Expand indices back to `[R, G, B, ...]` bytes, row-major.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let colors = self.palette.colors();
        let mut rgb = Vec::with_capacity(self.grid.indices().len() * 3);
        for &idx in self.grid.indices() {
            rgb.extend_from_slice(&colors[idx as usize].to_bytes());
        }
        rgb
    }
}
