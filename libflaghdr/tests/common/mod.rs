#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

pub const TEST_NAME: &str = "TEST";

/// Color channels are filled with noise so that only the alpha byte can leak into the output
pub fn rgba_with_alpha(width: u32, height: u32, alpha: &[u8]) -> RgbaImage {
    assert_eq!((width * height) as usize, alpha.len());
    RgbaImage::from_fn(width, height, |x, y| {
        let i = (y * width + x) as usize;
        Rgba([(i * 7) as u8, 0xaa, 0x55, alpha[i]])
    })
}

pub fn save_rgba_png(path: &Path, width: u32, height: u32, alpha: &[u8]) {
    rgba_with_alpha(width, height, alpha)
        .save_with_format(path, ImageFormat::Png)
        .expect("write rgba fixture");
}

pub fn save_rgb_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([1, 2, 3]))
        .save_with_format(path, ImageFormat::Png)
        .expect("write rgb fixture");
}

/// Pulls every `0x..` literal out of a rendered header, in order
pub fn literals(header: &str) -> Vec<u8> {
    header
        .lines()
        .filter(|l| l.starts_with("    0x"))
        .flat_map(|l| l.trim().split_terminator(','))
        .map(|lit| u8::from_str_radix(lit.trim_start_matches("0x"), 16).expect("hex literal"))
        .collect()
}
