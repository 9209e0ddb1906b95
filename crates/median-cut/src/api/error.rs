//! Error type for the median-cut public API.
//!
//! All failures are deterministic: quantization is a pure in-memory
//! computation, so none of these errors is worth retrying.

use std::fmt;

/// Unified error type for quantization.
///
/// # Example
///
/// ```
/// use median_cut::{PaletteSize, QuantizeError};
///
/// let err = PaletteSize::new(12).unwrap_err();
/// assert_eq!(err, QuantizeError::InvalidPaletteSize { requested: 12 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Requested color count is not a power of two in `1..=256`
    InvalidPaletteSize {
        /// The rejected color count
        requested: usize,
    },
    /// Palette-size range whose lower bound exceeds its upper bound
    InvalidPaletteRange {
        /// Lower bound of the range
        lower: usize,
        /// Upper bound of the range
        upper: usize,
    },
    /// No pixels were supplied
    EmptyInput,
    /// Pixel count does not match `width * height`
    DimensionMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// A partition range with `start > end` or `end` past the array.
    ///
    /// Never produced by [`PaletteBuilder`](crate::PaletteBuilder) on valid
    /// input; seeing it means the caller or the partitioner has a bug.
    InvalidRange {
        /// First index of the range (inclusive)
        start: usize,
        /// Last index of the range (inclusive)
        end: usize,
        /// Length of the array the range was applied to
        len: usize,
    },
    /// Channel value outside `0..=255`
    ChannelOutOfRange {
        /// The rejected value
        value: i32,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::InvalidPaletteSize { requested } => write!(
                f,
                "invalid palette size {}: must be a power of two between 1 and 256",
                requested
            ),
            QuantizeError::InvalidPaletteRange { lower, upper } => write!(
                f,
                "invalid palette range {}-{}: lower bound exceeds upper bound",
                lower, upper
            ),
            QuantizeError::EmptyInput => write!(f, "no pixels to quantize"),
            QuantizeError::DimensionMismatch { len, width, height } => write!(
                f,
                "pixel buffer length {} does not match dimensions {}x{}",
                len, width, height
            ),
            QuantizeError::InvalidRange { start, end, len } => write!(
                f,
                "invalid partition range [{}, {}] for array of length {}",
                start, end, len
            ),
            QuantizeError::ChannelOutOfRange { value } => {
                write!(f, "channel value {} is outside 0..=255", value)
            }
        }
    }
}

impl std::error::Error for QuantizeError {}
