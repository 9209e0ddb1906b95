//! Test fixtures: raw images written to temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Horizontal red ramp with a vertical blue ramp, `width` x `height`
pub fn gradient_bytes(width: usize, height: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.saturating_sub(1).max(1)) as u8;
            let b = (y * 255 / height.saturating_sub(1).max(1)) as u8;
            bytes.extend_from_slice(&[r, 128, b]);
        }
    }
    bytes
}

/// Write a raw image named `<stem>_<W>x<H>.raw` into `dir`
pub fn write_raw(dir: &Path, stem: &str, width: usize, height: usize, bytes: &[u8]) -> PathBuf {
    let path = dir.join(format!("{stem}_{width}x{height}.raw"));
    fs::write(&path, bytes).expect("write raw fixture");
    path
}

/// Write a gradient raw image into `dir`
pub fn write_gradient(dir: &Path, stem: &str, width: usize, height: usize) -> PathBuf {
    write_raw(dir, stem, width, height, &gradient_bytes(width, height))
}
