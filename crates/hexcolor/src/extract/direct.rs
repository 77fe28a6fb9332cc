use hexcolor_common::Rgba;
use tracing::debug;

use super::RgbaExtractor;
use crate::color::ColorValue;

/// Reads stored channels without converting between color spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectExtractor;

impl RgbaExtractor for DirectExtractor {
    fn extract_rgba(&self, color: &ColorValue) -> Rgba {
        if !color.space().has_rgb_model() {
            debug!(space = ?color.space(), "color space has no RGB model, returning zero channels");
            return Rgba::ZERO;
        }
        color.stored_rgba()
    }
}
