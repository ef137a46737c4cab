//! Minimal 24-bit bitmap writer for test fixtures.

use std::io::{self, Write};
use std::path::Path;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;

/// Bottom-up rows are not supported: pixels are stored top-down in BGR order.
pub struct BMP<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> BMP<'a> {
    pub fn from_mem(width: usize, height: usize, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        let row_size = (3 * self.width + 3) & !3; // rows are padded to 4 bytes
        let pixel_array_size = (row_size * self.height) as u32;
        let offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

        let mut out = Vec::with_capacity((offset + pixel_array_size) as usize);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(offset + pixel_array_size).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        out.extend_from_slice(&(self.width as i32).to_le_bytes());
        out.extend_from_slice(&(-(self.height as i32)).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
        out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
        out.extend_from_slice(&pixel_array_size.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        let padding = vec![0u8; row_size - self.width * 3];
        for row in self.pixels.chunks_exact(self.width * 3).take(self.height) {
            out.extend_from_slice(row);
            out.extend_from_slice(&padding);
        }

        std::fs::File::create(filename)?.write_all(&out)
    }
}
