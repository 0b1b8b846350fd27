use anyhow::Result;
use image::{Rgb, RgbImage};
use std::env;

fn main() -> Result<()> {
    let output = env::args().nth(1).unwrap_or_else(|| "tests/test_logo.png".to_string());

    // Two-axis gradient so resampled frames are not flat
    let img = RgbImage::from_fn(1200, 800, |x, y| {
        Rgb([(x * 255 / 1199) as u8, (y * 255 / 799) as u8, 128])
    });
    img.save(&output)?;
    println!("Created 1200x800 RGB test image at {}", output);
    Ok(())
}
