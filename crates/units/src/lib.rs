//! Length and viewport primitives.
//!
//! All arithmetic downstream of this crate happens in the canonical unit,
//! the CSS pixel (96 per inch).

pub mod length;
pub mod parsers;
pub mod viewport;

pub use length::{to_canonical, CanonicalLength, Length, Unit};
pub use parsers::UnitParseError;
pub use viewport::ViewportRect;
