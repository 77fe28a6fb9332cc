//! Channel-wise color comparison.

use crate::color::ColorValue;
use crate::extract::{platform_extractor, RgbaExtractor};

/// Compares colors by their extracted sRGB channels.
///
/// Each channel pair must differ by at most `tolerance`. The default
/// tolerance is zero, so the default comparison is exact.
#[derive(Clone, Copy)]
pub struct ColorComparator<'a> {
    extractor: &'a dyn RgbaExtractor,
    tolerance: f64,
}

impl Default for ColorComparator<'static> {
    fn default() -> Self {
        Self::new(platform_extractor())
    }
}

impl<'a> ColorComparator<'a> {
    pub fn new(extractor: &'a dyn RgbaExtractor) -> Self {
        Self {
            extractor,
            tolerance: 0.0,
        }
    }

    /// Negative or NaN tolerances behave like zero.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn compare(&self, a: &ColorValue, b: &ColorValue) -> bool {
        let lhs = self.extractor.extract_rgba(a);
        let rhs = self.extractor.extract_rgba(b);
        lhs.within(rhs, self.tolerance)
    }
}

impl ColorValue {
    /// True when both colors extract to identical channels.
    ///
    /// This is exact: two colors one rounding step apart are not equal.
    /// Use [`approx_eq`](Self::approx_eq) for a tolerance.
    pub fn is_equal(&self, other: &ColorValue) -> bool {
        ColorComparator::default().compare(self, other)
    }

    pub fn approx_eq(&self, other: &ColorValue, tolerance: f64) -> bool {
        ColorComparator::default()
            .with_tolerance(tolerance)
            .compare(self, other)
    }
}
