use std::fmt;
use std::str::FromStr;

use hexcolor_common::{ColorError, ColorSpace, Rgba};
use serde::{Deserialize, Serialize};

use crate::extract::{platform_extractor, RgbaExtractor};

/// An immutable color with four normalized channels.
///
/// Channels are nominally in `[0.0, 1.0]` but nothing clamps them: values
/// built from out-of-range components are kept as given. Colors built by
/// this crate are in [`ColorSpace::Srgb`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    #[serde(default)]
    space: ColorSpace,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl ColorValue {
    /// Transparent black. Also the result of a failed lenient hex parse.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates an sRGB color from normalized channels.
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::in_space(ColorSpace::Srgb, red, green, blue, alpha)
    }

    /// Creates a color whose channels are expressed in `space`.
    pub const fn in_space(space: ColorSpace, red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            space,
        }
    }

    /// Creates a color from red/green/blue in `0..=255` and alpha in `0..=100`.
    ///
    /// No bounds are enforced; out-of-range components produce out-of-range
    /// channels.
    pub fn from_components(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(red / 255.0, green / 255.0, blue / 255.0, alpha / 100.0)
    }

    /// [`from_components`](Self::from_components) with alpha at 100.
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_components(red, green, blue, 100.0)
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Returns a copy with the alpha channel replaced.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Channels as stored, without any color space conversion.
    pub(crate) fn stored_rgba(&self) -> Rgba {
        Rgba::new(self.red, self.green, self.blue, self.alpha)
    }

    /// Channels in standard RGB, using the extractor for this platform.
    pub fn rgba(&self) -> Rgba {
        platform_extractor().extract_rgba(self)
    }

    /// Encodes the stored channels as `#rrggbb`, or `#rrggbbaa` when the
    /// color is not fully opaque. Channels are rounded and clamped to a byte.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = (
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue),
        );
        if self.alpha == 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = channel_byte(self.alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn channel_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}
