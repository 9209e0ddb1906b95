// palette::palette and domain_tests::domain_tests mirror their parents
#![allow(clippy::module_inception)]

//! median-cut: deterministic median-cut color quantization
//!
//! This library reduces an 8-bit RGB image to a power-of-two palette with
//! the median-cut algorithm, then assigns every pixel its nearest palette
//! entry. It does no I/O; readers and encoders live with the caller.
//!
//! # Quick Start
//!
//! The [`MedianCutQuantizer`] is the primary entry point:
//!
//! ```
//! use median_cut::{MedianCutQuantizer, PaletteSize, Rgb};
//!
//! let pixels = vec![Rgb::new(200, 10, 50)];
//! let quantizer = MedianCutQuantizer::new(PaletteSize::new(1).unwrap());
//! let image = quantizer.quantize(&pixels, 1, 1).unwrap();
//!
//! assert_eq!(image.palette().colors(), &[Rgb::new(200, 10, 50)]);
//! assert_eq!(image.grid().indices(), &[0]);
//! ```
//!
//! # Algorithm
//!
//! ```text
//! source pixels ──copy──> working array
//!                              |
//!                              v
//!          partition(0, len-1, depth = log2(colors))
//!             |  widest channel (ties: R ≥ G ≥ B)
//!             |  stable sort of the range by that channel
//!             |  cut at (start + end) / 2, left half first
//!             v
//!          leaf: (max + min) / 2 per channel ──> palette[cursor++]
//!                              |
//!                              v
//!          pad unfilled slots with black
//!                              |
//! source pixels ───────────────+──> nearest palette index (squared RGB,
//!                                   first index wins ties) ──> IndexGrid
//! ```
//!
//! ## Determinism
//!
//! There is no randomness and no unstable sort anywhere in the pipeline.
//! For the same pixels and palette size the palette (including its order)
//! and the index grid are bit-identical between runs.
//!
//! ## Leaf Colors
//!
//! A leaf box is represented by the midpoint of each channel's range,
//! `(max + min) / 2` with truncating division, not by the mean of its
//! pixels. Outliers inside a box therefore pull its color toward them.
//!
//! ## Palette Padding
//!
//! A range of `n` pixels produces at most `n` leaves. When an image has
//! fewer pixels than palette slots the trailing slots are black; see
//! [`Palette::filled()`].

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod partition;

#[cfg(test)]
mod domain_tests;

pub use api::{MedianCutQuantizer, QuantizeError};
pub use color::{Channel, ChannelBounds, Rgb};
pub use output::{map_to_palette, nearest_index, IndexGrid, QuantizedImage};
pub use palette::{Palette, PaletteBuilder, PaletteSize, PaletteSizeRange, MAX_PALETTE_SIZE};
pub use partition::{leaf_count, partition, sort_range};
