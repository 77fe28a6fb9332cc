mod rgba;
mod space;

pub use rgba::*;
pub use space::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_within_zero_tolerance_is_exact() {
        let a = Rgba::new(1.0, 0.0, 0.0, 1.0);
        assert!(a.within(a, 0.0));
        assert!(!a.within(Rgba::new(1.0, 0.0, 0.0, 0.999_999), 0.0));
    }

    #[test]
    fn rgba_within_tolerance() {
        let a = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let b = Rgba::new(0.502, 0.498, 0.5, 1.0);
        assert!(a.within(b, 0.01));
        assert!(!a.within(b, 0.001));
    }

    #[test]
    fn rgba_negative_or_nan_tolerance_is_zero() {
        let a = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let b = Rgba::new(0.6, 0.5, 0.5, 1.0);
        assert!(!a.within(b, -1.0));
        assert!(!a.within(b, f64::NAN));
        assert!(a.within(a, -1.0));
    }

    #[test]
    fn rgba_nan_channel_never_matches() {
        let a = Rgba::new(f64::NAN, 0.0, 0.0, 1.0);
        assert!(!a.within(a, 1.0));
    }

    #[test]
    fn rgba_from_array() {
        let c = Rgba::from([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Rgba::default(), Rgba::ZERO);
    }

    #[test]
    fn rgba_serialization() {
        let c = Rgba::new(1.0, 0.5, 0.0, 1.0);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn color_space_serialization() {
        let spaces = [
            ColorSpace::Srgb,
            ColorSpace::ExtendedSrgb,
            ColorSpace::LinearSrgb,
            ColorSpace::DisplayP3,
            ColorSpace::DeviceRgb,
            ColorSpace::Pattern,
        ];
        for space in &spaces {
            let json = serde_json::to_string(space).unwrap();
            let deserialized: ColorSpace = serde_json::from_str(&json).unwrap();
            assert_eq!(*space, deserialized);
        }
        assert_eq!(
            serde_json::to_string(&ColorSpace::DisplayP3).unwrap(),
            "\"display_p3\""
        );
    }
}
