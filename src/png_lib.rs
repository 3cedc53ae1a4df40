use anyhow::{Context, Result};
use image::{ColorType, ImageFormat, ImageOutputFormat, RgbImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Encode an 8-bit RGB image as PNG and write it to `output_path`,
/// replacing any existing file.
///
/// The PNG is encoded in memory before the file is opened, so an encoding
/// failure never leaves a partial file behind.
pub fn write_png<P: AsRef<Path>>(img: &RgbImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .context("Failed to encode PNG")?;

    fs::write(output_path, bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(())
}

/// Decode the PNG at `path` and check that it matches `expected` exactly:
/// same dimensions, 8-bit RGB, and identical pixels.
pub fn verify_png<P: AsRef<Path>>(path: P, expected: &RgbImage) -> Result<()> {
    let path = path.as_ref();

    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .with_context(|| format!("{} is not a valid PNG", path.display()))?;

    if decoded.color() != ColorType::Rgb8 {
        anyhow::bail!(
            "{} has color type {:?}, expected {:?}",
            path.display(), decoded.color(), ColorType::Rgb8
        );
    }

    let actual = decoded.to_rgb8();
    if actual.dimensions() != expected.dimensions() {
        anyhow::bail!(
            "{} is {}x{}, expected {}x{}",
            path.display(),
            actual.width(), actual.height(),
            expected.width(), expected.height()
        );
    }

    for (x, y, want) in expected.enumerate_pixels() {
        let got = actual.get_pixel(x, y);
        if got != want {
            anyhow::bail!(
                "{} pixel (row {}, col {}) is {:?}, expected {:?}",
                path.display(), y, x, got.0, want.0
            );
        }
    }

    Ok(())
}
