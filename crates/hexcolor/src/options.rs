//! Serializable options a host application can embed in its own config.
//!
//! ```toml
//! [colors.parse]
//! layout = "rgba"
//!
//! [colors.compare]
//! tolerance = 0.002
//! ```

use hexcolor_common::ColorError;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::compare::ColorComparator;
use crate::hex::HexLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub layout: HexLayout,
}

impl ParseOptions {
    /// Lenient parse with these options.
    pub fn parse(&self, hex: &str) -> ColorValue {
        ColorValue::from_hex_with_layout(hex, self.layout)
    }

    /// Strict parse with these options.
    pub fn try_parse(&self, hex: &str) -> Result<ColorValue, ColorError> {
        ColorValue::try_from_hex_with_layout(hex, self.layout)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Maximum per-channel difference. Zero means exact comparison.
    pub tolerance: f64,
}

impl CompareOptions {
    pub fn comparator(&self) -> ColorComparator<'static> {
        ColorComparator::default().with_tolerance(self.tolerance)
    }
}
