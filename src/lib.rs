use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

pub mod png_lib;
pub mod report_lib;

pub use png_lib::{verify_png, write_png};
pub use report_lib::FixtureSummary;

pub const DEFAULT_OUTPUT: &str = "mipmap_test_2x2.png";

/// Red-channel brightness of each pixel in the mipmap fixture, row-major.
pub const MIPMAP_LUMINANCES: [[f32; 2]; 2] = [
    [0.05, 0.8],
    [0.05, 0.1],
];

// Trait to abstract the generator configuration
pub trait FixtureConfig {
    fn output_path(&self) -> &str;
    fn verify(&self) -> bool;
}

/// Grid of RGB float triples in [0,1], stored row-major and channel-last.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureImage {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl FixtureImage {
    pub fn zeros(width: usize, height: usize) -> Self {
        FixtureImage {
            width,
            height,
            data: vec![0.0; width * height * 3],
        }
    }

    /// The 2x2 fixture used by the mipmap tests: bright top-right pixel,
    /// dim everywhere else.
    pub fn mipmap_test_2x2() -> Self {
        let mut img = FixtureImage::zeros(2, 2);
        for (row, values) in MIPMAP_LUMINANCES.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                let i = img.offset(row, col);
                img.data[i..i + 3].copy_from_slice(&[v, v, v]);
            }
        }
        img
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [f32; 3]) -> Result<()> {
        anyhow::ensure!(
            row < self.height && col < self.width,
            "Pixel ({}, {}) is outside a {}x{} image",
            row, col, self.width, self.height
        );
        let i = self.offset(row, col);
        self.data[i..i + 3].copy_from_slice(&rgb);
        Ok(())
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<[f32; 3]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let i = self.offset(row, col);
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// One channel of every pixel, as rows. Panics if `channel > 2`.
    pub fn channel(&self, channel: usize) -> Vec<Vec<f32>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.data[self.offset(row, col) + channel])
                    .collect()
            })
            .collect()
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * 3
    }
}

/// Scale [0,1] samples to 8-bit by multiplying by 255 and truncating.
/// No rounding, so 0.05 becomes 12 and 0.1 becomes 25.
pub fn to_rgb8(img: &FixtureImage) -> Result<RgbImage> {
    let width = u32::try_from(img.width()).context("Image width does not fit in u32")?;
    let height = u32::try_from(img.height()).context("Image height does not fit in u32")?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b] = img
            .pixel(y as usize, x as usize)
            .unwrap_or([0.0; 3]);
        Rgb([to_u8(r), to_u8(g), to_u8(b)])
    }))
}

fn to_u8(v: f32) -> u8 {
    // `as` truncates toward zero and saturates at the u8 bounds
    (v * 255.0) as u8
}

/// Build the fixture, write it, print the summary and optionally verify it.
pub fn run<T: FixtureConfig>(config: &T) -> Result<FixtureSummary> {
    let fixture = FixtureImage::mipmap_test_2x2();
    let encoded = to_rgb8(&fixture)?;

    write_png(&encoded, config.output_path())
        .with_context(|| format!("Failed to create fixture {}", config.output_path()))?;

    let summary = FixtureSummary::from_image(&fixture);
    println!("Created {}", config.output_path());
    print!("{}", summary);

    if config.verify() {
        verify_png(config.output_path(), &encoded)?;
        println!("Verified {}", config.output_path());
    }

    Ok(summary)
}
