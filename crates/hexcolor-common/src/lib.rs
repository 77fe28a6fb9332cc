pub mod errors;
pub mod types;

pub use errors::ColorError;
pub use types::{ColorSpace, Rgba};

pub type Result<T> = std::result::Result<T, ColorError>;
