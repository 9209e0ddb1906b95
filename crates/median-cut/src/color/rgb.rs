//! 8-bit RGB color value
//!
//! [`Rgb`] is the single color type used throughout the quantizer: source
//! pixels, working-array entries and palette entries are all `Rgb`.

use std::cmp::Ordering;
use std::fmt;

use crate::api::QuantizeError;

/// One of the three color channels.
///
/// The declaration order is the tie-break order used when choosing a split
/// channel: red beats green and blue, green beats blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in tie-break order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in `[r, g, b]` byte order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// An immutable 8-bit-per-channel RGB sample.
///
/// Two samples with the same channel values are the same color; there is no
/// identity beyond the values.
///
/// # Example
///
/// ```
/// use median_cut::{Channel, Rgb};
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.channel(Channel::Green), 128);
/// assert_eq!(orange.distance_sq(Rgb::new(255, 130, 0)), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Black, the value given to palette slots no leaf filled.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integers, rejecting anything outside `0..=255`.
    ///
    /// Out-of-range input is a caller error and is never clamped.
    ///
    /// ```
    /// use median_cut::Rgb;
    ///
    /// assert_eq!(Rgb::try_from_ints(1, 2, 3).unwrap(), Rgb::new(1, 2, 3));
    /// assert!(Rgb::try_from_ints(256, 0, 0).is_err());
    /// ```
    pub fn try_from_ints(r: i32, g: i32, b: i32) -> Result<Self, QuantizeError> {
        let convert = |value: i32| {
            u8::try_from(value).map_err(|_| QuantizeError::ChannelOutOfRange { value })
        };
        Ok(Self::new(convert(r)?, convert(g)?, convert(b)?))
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Red channel value.
    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel value.
    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel value.
    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Value of the selected channel.
    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Squared Euclidean distance in plain RGB.
    ///
    /// This is the only metric the quantizer uses. The maximum value,
    /// `3 * 255²`, fits comfortably in a `u32`.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Three-way comparison restricted to one channel.
    #[inline]
    pub fn cmp_channel(self, other: Rgb, channel: Channel) -> Ordering {
        self.channel(channel).cmp(&other.channel(channel))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
