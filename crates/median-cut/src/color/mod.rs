//! Color value and channel range types
//!
//! - [`Rgb`]: immutable 8-bit sample with squared-distance and per-channel comparison
//! - [`Channel`]: red / green / blue selector with a fixed tie-break order
//! - [`ChannelBounds`]: per-channel min/max over a run of colors
//!
//! # Example
//!
//! ```
//! use median_cut::{Channel, ChannelBounds, Rgb};
//!
//! let colors = [Rgb::new(0, 10, 10), Rgb::new(255, 20, 10)];
//! let bounds = ChannelBounds::of(&colors).unwrap();
//!
//! assert_eq!(bounds.widest_channel(), Channel::Red);
//! assert_eq!(bounds.midpoint(), Rgb::new(127, 15, 10));
//! ```

mod bounds;
mod rgb;

pub use bounds::ChannelBounds;
pub use rgb::{Channel, Rgb};
