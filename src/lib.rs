//! medcut - median-cut color quantizer
//!
//! Reads raw RGB images, quantizes them with the `median-cut` crate and
//! writes 8-bit indexed BMP files.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
