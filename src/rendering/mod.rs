pub mod bmp;
pub mod preview;

pub use bmp::{encode_bmp, write_bmp};
pub use preview::{encode_png, write_png};
