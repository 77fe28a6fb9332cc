use serde::{Deserialize, Serialize};

/// Channels extracted in standard RGB, nominally in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// All channels zero. Returned when a color has no RGB model.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when every channel pair differs by at most `tolerance`.
    ///
    /// Negative or NaN tolerances are treated as zero. A NaN channel never
    /// matches anything.
    pub fn within(self, other: Rgba, tolerance: f64) -> bool {
        let tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self.to_array()
            .into_iter()
            .zip(other.to_array())
            .all(|(a, b)| (b - a).abs() <= tolerance)
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }
}
