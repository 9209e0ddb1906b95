//! Assertion helpers for BMP output.

use pretty_assertions::assert_eq;

fn u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

/// Parsed view of the fields medcut writes
#[derive(Debug)]
pub struct BmpView<'a> {
    pub width: usize,
    pub height: usize,
    pub colors: usize,
    pub palette: Vec<[u8; 3]>,
    pub pixels: &'a [u8],
}

impl BmpView<'_> {
    /// Palette index at (`row`, `col`) counted from the top of the image
    pub fn index_at(&self, row: usize, col: usize) -> u8 {
        let stored_row = self.height - 1 - row;
        self.pixels[stored_row * self.width + col]
    }

    /// RGB color at (`row`, `col`) counted from the top of the image
    pub fn color_at(&self, row: usize, col: usize) -> [u8; 3] {
        self.palette[self.index_at(row, col) as usize]
    }
}

/// Assert `bytes` is a well-formed medcut BMP and return its fields
pub fn assert_bmp(bytes: &[u8]) -> BmpView<'_> {
    assert!(bytes.len() >= 54, "BMP too short: {} bytes", bytes.len());
    assert_eq!(&bytes[0..2], b"BM", "missing BM signature");
    assert_eq!(u32_le(bytes, 14), 40, "info header size");
    assert_eq!(u16::from_le_bytes([bytes[28], bytes[29]]), 8, "bits per pixel");

    let width = u32_le(bytes, 18) as usize;
    let height = u32_le(bytes, 22) as usize;
    let colors = u32_le(bytes, 46) as usize;
    let offset = u32_le(bytes, 10) as usize;
    assert_eq!(offset, 54 + 4 * colors, "pixel data offset");
    assert_eq!(bytes.len(), offset + width * height, "file length");
    assert_eq!(
        u32::from_be_bytes(bytes[2..6].try_into().unwrap()) as usize,
        width * height,
        "file size placeholder"
    );

    let palette = bytes[54..offset]
        .chunks_exact(4)
        .map(|bgr0| [bgr0[2], bgr0[1], bgr0[0]])
        .collect();
    let pixels = &bytes[offset..];
    assert!(
        pixels.iter().all(|&i| (i as usize) < colors),
        "pixel index outside {colors}-entry palette"
    );

    BmpView {
        width,
        height,
        colors,
        palette,
        pixels,
    }
}
