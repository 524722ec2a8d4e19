use image::{Rgb, RgbImage};
use std::path::Path;

/// Writes a real decodable JPEG with a simple gradient fill.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

/// Writes a file with a JPEG extension that no decoder will accept.
pub fn write_broken_jpeg(path: &Path) {
    std::fs::write(path, b"definitely not a jpeg").unwrap();
}
