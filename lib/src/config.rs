use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Spatial dithering applied when quantizing pixels onto glyphs
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DitherMode {
    #[default]
    None,
    Ordered2,
    Ordered4,
    Ordered8,
    Random,
    FloydSteinberg,
}

impl DitherMode {
    pub const ALL: [DitherMode; 6] = [
        DitherMode::None,
        DitherMode::Ordered2,
        DitherMode::Ordered4,
        DitherMode::Ordered8,
        DitherMode::Random,
        DitherMode::FloydSteinberg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DitherMode::None => "none",
            DitherMode::Ordered2 => "ordered2",
            DitherMode::Ordered4 => "ordered4",
            DitherMode::Ordered8 => "ordered8",
            DitherMode::Random => "random",
            DitherMode::FloydSteinberg => "fstein",
        }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DitherMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| Error::UnknownDither(s.to_string()))
    }
}

/// Configuration for turning an image into a cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,            // output columns, default 80
    pub ratio: f32,            // character aspect ratio, default 0.5
    pub gamma: f32,            // default 0.5

    pub dither: DitherMode,    // default none
    pub antialias: bool,       // default false
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            ratio: 0.5,
            gamma: 0.5,

            dither: DitherMode::None,
            antialias: false,
        }
    }
}

impl RenderConfig {
    pub const MAX_WIDTH: u32 = 4096;

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.width > Self::MAX_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "width must be between 1 and {}, got {}",
                Self::MAX_WIDTH,
                self.width
            )));
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "ratio must be a positive number, got {}",
                self.ratio
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 || self.gamma > 10.0 {
            return Err(Error::InvalidConfig(format!(
                "gamma must be in (0, 10], got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    /// Number of rows for an `input_width` x `input_height` image:
    /// `round(width * ratio * input_height / input_width)`, at least 1.
    pub fn grid_height(&self, input_width: u32, input_height: u32) -> u32 {
        if input_width == 0 {
            return 1;
        }
        let rows = self.width as f64 * self.ratio as f64 * input_height as f64 / input_width as f64;
        (rows.round() as u32).max(1)
    }
}
