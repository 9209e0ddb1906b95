//! Output of the quantization pipeline.
//!
//! - [`map_to_palette`] / [`nearest_index`]: nearest-color assignment
//! - [`IndexGrid`]: row-major palette indices with dimensions
//! - [`QuantizedImage`]: palette plus grid, the input an indexed encoder needs

mod index_grid;
mod mapper;
mod quantized_image;

pub use index_grid::IndexGrid;
pub use mapper::{map_to_palette, nearest_index};
pub use quantized_image::QuantizedImage;
