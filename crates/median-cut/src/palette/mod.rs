//! Palette types
//!
//! This module provides the validated [`PaletteSize`], doubling
//! [`PaletteSizeRange`], the fixed-capacity [`Palette`] and the
//! [`PaletteBuilder`] that runs median cut to fill it.

mod builder;
mod palette;
mod size;

pub use builder::PaletteBuilder;
pub use palette::Palette;
pub use size::{PaletteSize, PaletteSizeRange, MAX_PALETTE_SIZE};
