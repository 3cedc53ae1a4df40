use crate::FixtureImage;
use std::fmt;

/// Diagnostic numbers printed after the fixture is written. Values are taken
/// from the float buffer before 8-bit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSummary {
    pub total_luminance: f32,
    pub pixel_luminances: Vec<Vec<f32>>,
}

impl FixtureSummary {
    pub fn from_image(img: &FixtureImage) -> Self {
        // Channels are equal, so red stands in for luminance
        let pixel_luminances = img.channel(0);
        let total_luminance = pixel_luminances.iter().flatten().sum();

        FixtureSummary {
            total_luminance,
            pixel_luminances,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Total luminance: {}", self.total_luminance),
            format!("Pixel luminances: {:?}", self.pixel_luminances),
        ]
    }
}

impl fmt::Display for FixtureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
