//! Color spaces a color value can be expressed in, and best-effort
//! conversion of their RGB channels to sRGB.

use serde::{Deserialize, Serialize};

/// Linear Display P3 to linear sRGB (D65, row-major).
const P3_TO_SRGB: [[f64; 3]; 3] = [
    [1.224_940_2, -0.224_940_4, 0.0],
    [-0.042_056_9, 1.042_057_1, 0.0],
    [-0.019_637_6, -0.078_636_1, 1.098_273_5],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Standard RGB. Channels are read as stored.
    #[default]
    Srgb,
    /// sRGB primaries and transfer, channels may leave `[0, 1]`.
    ExtendedSrgb,
    /// sRGB primaries with a linear transfer function.
    LinearSrgb,
    /// Display P3 primaries with the sRGB transfer function.
    DisplayP3,
    /// Device-dependent RGB. No conversion is available.
    DeviceRgb,
    /// Pattern or image-backed colors with no RGB model.
    Pattern,
}

impl ColorSpace {
    pub fn is_srgb(self) -> bool {
        self == ColorSpace::Srgb
    }

    /// Whether channels in this space can be read as red/green/blue at all.
    pub fn has_rgb_model(self) -> bool {
        self != ColorSpace::Pattern
    }

    /// Converts RGB channels from this space to sRGB.
    ///
    /// Returns `None` when no conversion exists for the space. Converted
    /// values are not clamped and may fall outside `[0, 1]`.
    pub fn convert_to_srgb(self, rgb: [f64; 3]) -> Option<[f64; 3]> {
        match self {
            ColorSpace::Srgb | ColorSpace::ExtendedSrgb => Some(rgb),
            ColorSpace::LinearSrgb => Some(rgb.map(linear_to_srgb)),
            ColorSpace::DisplayP3 => {
                let linear = rgb.map(srgb_to_linear);
                let mapped = P3_TO_SRGB.map(|row| {
                    row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2]
                });
                Some(mapped.map(linear_to_srgb))
            }
            ColorSpace::DeviceRgb | ColorSpace::Pattern => None,
        }
    }
}

/// Inverse sRGB gamma, mirrored for negative (extended) values.
fn srgb_to_linear(c: f64) -> f64 {
    let v = c.abs();
    let linear = if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// sRGB gamma, mirrored for negative (extended) values.
fn linear_to_srgb(c: f64) -> f64 {
    let v = c.abs();
    let encoded = if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}
