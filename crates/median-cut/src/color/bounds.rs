//! Per-channel range analysis over a run of colors.

use super::rgb::{Channel, Rgb};

/// Minimum and maximum of each channel over a non-empty set of colors.
///
/// This is the "box" of median cut: the split channel is the one with the
/// widest range, and a leaf box is represented by the midpoint of its ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBounds {
    min: [u8; 3],
    max: [u8; 3],
}

impl ChannelBounds {
    /// Scan `colors` for per-channel bounds.
    ///
    /// Returns `None` for an empty slice.
    pub fn of(colors: &[Rgb]) -> Option<Self> {
        let (first, rest) = colors.split_first()?;
        let mut min = first.to_bytes();
        let mut max = min;
        for color in rest {
            for (i, value) in color.to_bytes().into_iter().enumerate() {
                min[i] = min[i].min(value);
                max[i] = max[i].max(value);
            }
        }
        Some(Self { min, max })
    }

    /// Smallest value of `channel`.
    #[inline]
    pub fn min(&self, channel: Channel) -> u8 {
        self.min[channel.index()]
    }

    /// Largest value of `channel`.
    #[inline]
    pub fn max(&self, channel: Channel) -> u8 {
        self.max[channel.index()]
    }

    /// `max - min` for `channel`.
    #[inline]
    pub fn range(&self, channel: Channel) -> u8 {
        self.max(channel) - self.min(channel)
    }

    /// Channel with the largest range.
    ///
    /// Ties go to red over green and blue, then to green over blue.
    pub fn widest_channel(&self) -> Channel {
        let r = self.range(Channel::Red);
        let g = self.range(Channel::Green);
        let b = self.range(Channel::Blue);
        if r >= g && r >= b {
            Channel::Red
        } else if g >= b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }

    /// Representative color of the box: `(max + min) / 2` per channel,
    /// truncating.
    ///
    /// This is the range midpoint, not the mean of the colors in the box.
    pub fn midpoint(&self) -> Rgb {
        let mid = |channel: Channel| {
            ((self.max(channel) as u16 + self.min(channel) as u16) / 2) as u8
        };
        Rgb::new(mid(Channel::Red), mid(Channel::Green), mid(Channel::Blue))
    }
}
