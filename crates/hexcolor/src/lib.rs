//! Colors from hex strings and RGBA components.
//!
//! Parsing is lenient by default: input that cannot be read as hex yields
//! transparent black rather than an error. Strict variants return
//! [`ColorError`] instead. Comparison is exact unless a tolerance is given.
//!
//! # Quick Start
//!
//! ```rust
//! use hexcolor::ColorValue;
//!
//! let red = ColorValue::from_hex("#ff0000");
//! assert!(red.is_equal(&ColorValue::from_components(255.0, 0.0, 0.0, 100.0)));
//! assert!(ColorValue::from_hex("clearcolor").is_equal(&ColorValue::CLEAR));
//! assert!(ColorValue::try_from_hex("clearcolor").is_err());
//! ```

pub mod color;
pub mod compare;
pub mod extract;
pub mod hex;
pub mod options;

// Re-export core types for convenience
pub use color::ColorValue;
pub use compare::ColorComparator;
pub use extract::{platform_extractor, ConvertingExtractor, DirectExtractor, RgbaExtractor};
pub use hex::{is_valid_hex, HexLayout};
pub use hexcolor_common::{ColorError, ColorSpace, Rgba};
pub use options::{CompareOptions, ParseOptions};
