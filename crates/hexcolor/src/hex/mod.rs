//! Hex string parsing.
//!
//! The lenient parser ([`ColorValue::from_hex`]) never fails: input it
//! cannot read yields [`ColorValue::CLEAR`]. The strict parser
//! ([`ColorValue::try_from_hex`]) reports the same inputs as
//! [`ColorError::InvalidHexFormat`]. Both share one scanner.

mod scan;


use hexcolor_common::ColorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorValue;
use scan::{scan_hex, Scanned};

/// How scanned hex digits map onto channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexLayout {
    /// Low 24 bits are `RRGGBB`; alpha is always 1.0. Higher digits are
    /// never read as alpha.
    #[default]
    Rgb,
    /// Exactly eight digits are read as `RRGGBBAA`. Any other digit count
    /// falls back to [`HexLayout::Rgb`].
    Rgba,
}

impl HexLayout {
    fn decode(self, scanned: Scanned) -> ColorValue {
        let v = scanned.value;
        match self {
            HexLayout::Rgba if scanned.digits == 8 => ColorValue::new(
                byte_channel(v >> 24),
                byte_channel(v >> 16),
                byte_channel(v >> 8),
                byte_channel(v),
            ),
            _ => ColorValue::new(
                byte_channel(v >> 16),
                byte_channel(v >> 8),
                byte_channel(v),
                1.0,
            ),
        }
    }
}

fn byte_channel(v: u32) -> f64 {
    f64::from(v & 0xFF) / 255.0
}

/// Whether the lenient parser would read `s` as a color.
pub fn is_valid_hex(s: &str) -> bool {
    scan_hex(s).is_some()
}

impl ColorValue {
    /// Parses a hex color such as `#ff0000` or `FF0000`.
    ///
    /// Unreadable input yields transparent black instead of an error.
    pub fn from_hex(hex: &str) -> Self {
        Self::from_hex_with_layout(hex, HexLayout::Rgb)
    }

    /// [`from_hex`](Self::from_hex) with an explicit digit layout.
    pub fn from_hex_with_layout(hex: &str, layout: HexLayout) -> Self {
        Self::try_from_hex_with_layout(hex, layout).unwrap_or_else(|e| {
            debug!("{e}, falling back to transparent black");
            Self::CLEAR
        })
    }

    /// Parses a hex color, failing on unreadable input.
    pub fn try_from_hex(hex: &str) -> Result<Self, ColorError> {
        Self::try_from_hex_with_layout(hex, HexLayout::Rgb)
    }

    pub fn try_from_hex_with_layout(hex: &str, layout: HexLayout) -> Result<Self, ColorError> {
        scan_hex(hex)
            .map(|scanned| layout.decode(scanned))
            .ok_or_else(|| ColorError::InvalidHexFormat(hex.to_owned()))
    }
}
