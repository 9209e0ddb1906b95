use median_cut::QuantizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid palette argument '{0}': expected N or LOWER-UPPER")]
    InvalidPaletteArgument(String),

    #[error("Cannot read image dimensions from file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("Pixel data size mismatch in {}: expected {expected} bytes for {width}x{height}, got {actual}", .path.display())]
    PixelCountMismatch {
        path: PathBuf,
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Image too large for a BMP header: {width}x{height}")]
    ImageTooLarge { width: usize, height: usize },

    #[error("No .raw images found in {}", .0.display())]
    NoInputs(PathBuf),

    #[error("Quantization error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
