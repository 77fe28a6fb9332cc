//! Reading standard RGB channels out of a [`ColorValue`].
//!
//! Two strategies exist. [`DirectExtractor`] reads stored channels as-is.
//! [`ConvertingExtractor`] converts non-sRGB colors first and falls back to
//! a direct read when no conversion is available. [`platform_extractor`]
//! picks one per target.

mod converting;
mod direct;

pub use converting::ConvertingExtractor;
pub use direct::DirectExtractor;

use hexcolor_common::Rgba;

use crate::color::ColorValue;

/// Strategy for extracting sRGB channels from a color.
pub trait RgbaExtractor: Send + Sync {
    fn extract_rgba(&self, color: &ColorValue) -> Rgba;
}

/// The extractor used by [`ColorValue::rgba`] and [`ColorValue::is_equal`].
///
/// On macOS colors may carry any color space, so channels are converted.
/// On other platforms they are read directly.
pub fn platform_extractor() -> &'static dyn RgbaExtractor {
    #[cfg(target_os = "macos")]
    {
        &ConvertingExtractor
    }
    #[cfg(not(target_os = "macos"))]
    {
        &DirectExtractor
    }
}
