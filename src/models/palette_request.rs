use median_cut::{PaletteSize, PaletteSizeRange};
use std::str::FromStr;

use crate::error::AppError;

/// Palette sizes requested on the command line.
///
/// `"N"` asks for one run with N colors; `"L-U"` asks for one run per size
/// from L to U inclusive, doubling each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteRequest {
    range: PaletteSizeRange,
}

impl PaletteRequest {
    /// Request exactly one size.
    pub fn single(size: PaletteSize) -> Self {
        Self {
            range: PaletteSizeRange::single(size),
        }
    }

    /// Requested sizes, smallest first.
    pub fn sizes(&self) -> Vec<PaletteSize> {
        self.range.sizes().collect()
    }

    /// The underlying doubling range.
    pub fn range(&self) -> PaletteSizeRange {
        self.range
    }
}

fn parse_count(text: &str, original: &str) -> Result<PaletteSize, AppError> {
    let count: usize = text
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPaletteArgument(original.to_string()))?;
    Ok(PaletteSize::new(count)?)
}

impl FromStr for PaletteRequest {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('-') {
            Some((lower, upper)) => {
                let lower = parse_count(lower, s)?;
                let upper = parse_count(upper, s)?;
                Ok(Self {
                    range: PaletteSizeRange::new(lower, upper)?,
                })
            }
            None => Ok(Self::single(parse_count(s, s)?)),
        }
    }
}
