use hexcolor_common::Rgba;
use tracing::debug;

use super::{DirectExtractor, RgbaExtractor};
use crate::color::ColorValue;

/// Converts non-sRGB colors to sRGB before reading channels.
///
/// When the color's space has no conversion, the unconverted channels are
/// read directly. Those values may not be meaningful sRGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertingExtractor;

impl RgbaExtractor for ConvertingExtractor {
    fn extract_rgba(&self, color: &ColorValue) -> Rgba {
        let space = color.space();
        if space.is_srgb() {
            return DirectExtractor.extract_rgba(color);
        }

        let stored = color.stored_rgba();
        match space.convert_to_srgb([stored.r, stored.g, stored.b]) {
            Some([r, g, b]) => Rgba::new(r, g, b, stored.a),
            None => {
                debug!(?space, "no sRGB conversion available, reading channels directly");
                DirectExtractor.extract_rgba(color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcolor_common::ColorSpace;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_is_read_directly() {
        let c = ColorValue::from_hex("#336699");
        assert_eq!(ConvertingExtractor.extract_rgba(&c), c.stored_rgba());
    }

    #[test]
    fn linear_channels_are_encoded() {
        let c = ColorValue::in_space(ColorSpace::LinearSrgb, 0.5, 0.0, 1.0, 0.25);
        let rgba = ConvertingExtractor.extract_rgba(&c);
        assert!(approx_eq(rgba.r, 0.735_36));
        assert_eq!(rgba.g, 0.0);
        assert!(approx_eq(rgba.b, 1.0));
        assert_eq!(rgba.a, 0.25);
    }

    #[test]
    fn p3_red_converts_out_of_gamut() {
        let c = ColorValue::in_space(ColorSpace::DisplayP3, 1.0, 0.0, 0.0, 1.0);
        let rgba = ConvertingExtractor.extract_rgba(&c);
        assert!(rgba.r > 1.0);
        assert!(rgba.g < 0.0);
        assert_eq!(rgba.a, 1.0);
        assert_ne!(rgba, DirectExtractor.extract_rgba(&c));
    }

    #[test]
    fn device_rgb_falls_back_to_direct_read() {
        let c = ColorValue::in_space(ColorSpace::DeviceRgb, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(ConvertingExtractor.extract_rgba(&c), Rgba::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn extended_srgb_is_identity() {
        let c = ColorValue::in_space(ColorSpace::ExtendedSrgb, 1.2, -0.1, 0.5, 1.0);
        assert_eq!(ConvertingExtractor.extract_rgba(&c), Rgba::new(1.2, -0.1, 0.5, 1.0));
    }
}
