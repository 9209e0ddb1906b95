//! Per-pixel palette indices with image dimensions.

/// A 2-D grid of palette indices, one per source pixel, row-major.
///
/// # Example
///
/// ```
/// use median_cut::IndexGrid;
///
/// let grid = IndexGrid::new(vec![0, 1, 2, 3, 4, 5], 3, 2);
/// assert_eq!(grid.get(1, 0), Some(3));
/// assert_eq!(grid.rows().nth(1), Some(&[3u8, 4, 5][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexGrid {
    /// Wrap row-major `indices` for a `width` x `height` image.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Index at (`row`, `col`), if inside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.indices.get(row * self.width + col).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        // chunks_exact(0) panics; a zero-width grid has no pixels anyway
        self.indices.chunks_exact(self.width.max(1))
    }
}
