//! Public API for the median-cut crate.
//!
//! This module provides the high-level [`MedianCutQuantizer`] and the
//! [`QuantizeError`] type shared by every fallible operation.

mod error;
mod quantizer;

pub use error::QuantizeError;
pub use quantizer::MedianCutQuantizer;
