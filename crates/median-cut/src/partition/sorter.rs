//! Stable single-channel sort over a sub-range of the working array.

use crate::api::QuantizeError;
use crate::color::{Channel, Rgb};

/// Check that `[start, end]` is a valid inclusive range into `len` elements.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), QuantizeError> {
    if start > end || end >= len {
        return Err(QuantizeError::InvalidRange { start, end, len });
    }
    Ok(())
}

/// Sort `colors[start..=end]` by `channel`, non-decreasing, in place.
///
/// The sort is stable: colors with equal channel values keep their relative
/// order. The partitioner bisects the sorted range by position, so a stable
/// order is what makes the split (and the palette) reproducible.
/// Elements outside the range are not touched.
///
/// # Example
///
/// ```
/// use median_cut::{sort_range, Channel, Rgb};
///
/// let mut colors = vec![
///     Rgb::new(9, 0, 0),
///     Rgb::new(5, 1, 0),
///     Rgb::new(3, 2, 0),
///     Rgb::new(5, 3, 0),
/// ];
/// sort_range(&mut colors, 1, 3, Channel::Red).unwrap();
///
/// assert_eq!(colors[0], Rgb::new(9, 0, 0));
/// assert_eq!(&colors[1..], &[Rgb::new(3, 2, 0), Rgb::new(5, 1, 0), Rgb::new(5, 3, 0)]);
/// ```
pub fn sort_range(
    colors: &mut [Rgb],
    start: usize,
    end: usize,
    channel: Channel,
) -> Result<(), QuantizeError> {
    check_range(start, end, colors.len())?;
    // slice::sort_by_key is a stable merge-based sort
    colors[start..=end].sort_by_key(|color| color.channel(channel));
    Ok(())
}
