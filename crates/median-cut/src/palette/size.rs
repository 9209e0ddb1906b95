//! Validated palette sizes and doubling size ranges.

use std::fmt;

use crate::api::QuantizeError;

/// Largest palette an 8-bit index can address.
pub const MAX_PALETTE_SIZE: usize = 256;

/// A palette size: a power of two in `1..=256`.
///
/// Validation happens here, before any partitioning starts.
///
/// # Example
///
/// ```
/// use median_cut::PaletteSize;
///
/// let size = PaletteSize::new(32).unwrap();
/// assert_eq!(size.get(), 32);
/// assert_eq!(size.depth(), 5);
///
/// assert!(PaletteSize::new(0).is_err());
/// assert!(PaletteSize::new(24).is_err());
/// assert!(PaletteSize::new(512).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaletteSize(usize);

impl PaletteSize {
    /// Validate a requested color count.
    pub fn new(colors: usize) -> Result<Self, QuantizeError> {
        if colors == 0 || !colors.is_power_of_two() || colors > MAX_PALETTE_SIZE {
            return Err(QuantizeError::InvalidPaletteSize { requested: colors });
        }
        Ok(Self(colors))
    }

    /// Number of palette slots.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Recursion depth of median cut: `log2(size)`.
    #[inline]
    pub fn depth(self) -> u32 {
        self.0.trailing_zeros()
    }
}

impl TryFrom<usize> for PaletteSize {
    type Error = QuantizeError;

    fn try_from(colors: usize) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of palette sizes, stepped by doubling.
///
/// ```
/// use median_cut::{PaletteSize, PaletteSizeRange};
///
/// let range = PaletteSizeRange::new(
///     PaletteSize::new(4).unwrap(),
///     PaletteSize::new(32).unwrap(),
/// )
/// .unwrap();
/// let sizes: Vec<usize> = range.sizes().map(|s| s.get()).collect();
/// assert_eq!(sizes, vec![4, 8, 16, 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSizeRange {
    lower: PaletteSize,
    upper: PaletteSize,
}

impl PaletteSizeRange {
    /// Build a range; `lower` must not exceed `upper`.
    pub fn new(lower: PaletteSize, upper: PaletteSize) -> Result<Self, QuantizeError> {
        if lower > upper {
            return Err(QuantizeError::InvalidPaletteRange {
                lower: lower.get(),
                upper: upper.get(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// A range holding exactly one size.
    pub fn single(size: PaletteSize) -> Self {
        Self {
            lower: size,
            upper: size,
        }
    }

    /// Smallest size in the range.
    pub fn lower(&self) -> PaletteSize {
        self.lower
    }

    /// Largest size in the range.
    pub fn upper(&self) -> PaletteSize {
        self.upper
    }

    /// Sizes from `lower` to `upper`, doubling each step.
    pub fn sizes(&self) -> impl Iterator<Item = PaletteSize> {
        let upper = self.upper.get();
        std::iter::successors(Some(self.lower.get()), |&n| Some(n * 2))
            .take_while(move |&n| n <= upper)
            .map(PaletteSize)
    }
}
