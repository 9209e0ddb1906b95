//! Recursive median-cut partitioning of the working color array.

use super::sorter::{check_range, sort_range};
use crate::api::QuantizeError;
use crate::color::{ChannelBounds, Rgb};

/// Split `colors[start..=end]` into up to `2^depth` boxes, appending one
/// palette color per box to `palette` in left-to-right order.
///
/// At `depth == 0` the range is a leaf: its color is the per-channel range
/// midpoint (see [`ChannelBounds::midpoint`]). Otherwise the range is
/// stable-sorted by its widest channel and cut at `(start + end) / 2`; the
/// left half `[start, m]` is processed before the right half `[m + 1, end]`.
///
/// A single-color range that still has depth left only recurses to the
/// left. The empty right half produces no leaf, so a range of `n` pixels
/// yields `min(n, 2^depth)` colors.
///
/// `colors` is reordered inside `[start, end]`; nothing outside it moves.
///
/// # Errors
///
/// [`QuantizeError::InvalidRange`] if `start > end` or `end` is out of bounds.
///
/// # Example
///
/// ```
/// use median_cut::{partition, Rgb};
///
/// let mut colors = vec![
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 0, 0),
/// ];
/// let mut palette = Vec::new();
/// partition(&mut colors, 0, 3, 1, &mut palette).unwrap();
///
/// assert_eq!(palette, vec![Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)]);
/// ```
pub fn partition(
    colors: &mut [Rgb],
    start: usize,
    end: usize,
    depth: u32,
    palette: &mut Vec<Rgb>,
) -> Result<(), QuantizeError> {
    check_range(start, end, colors.len())?;
    let Some(bounds) = ChannelBounds::of(&colors[start..=end]) else {
        return Err(QuantizeError::InvalidRange {
            start,
            end,
            len: colors.len(),
        });
    };

    if depth == 0 {
        palette.push(bounds.midpoint());
        return Ok(());
    }

    sort_range(colors, start, end, bounds.widest_channel())?;

    // (start + end) / 2 without the overflow
    let middle = start + (end - start) / 2;
    partition(colors, start, middle, depth - 1, palette)?;
    if middle < end {
        partition(colors, middle + 1, end, depth - 1, palette)?;
    }
    Ok(())
}

/// Number of leaves [`partition`] emits for a range of `len` colors at `depth`.
pub fn leaf_count(len: usize, depth: u32) -> usize {
    if len == 0 {
        return 0;
    }
    if depth == 0 {
        return 1;
    }
    let left = len.div_ceil(2);
    leaf_count(left, depth - 1) + leaf_count(len - left, depth - 1)
}
