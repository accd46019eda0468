//! Turns two sized SVG roots into one side-by-side composite.
//!
//! The flow is strictly [`resolve`] → [`plan`] → [`embed`]; each step is pure.

mod compositor;
mod embed;
mod error;
mod resolver;

pub use compositor::{plan, LayoutPlan, Side};
pub use embed::embed;
pub use error::LayoutError;
pub use resolver::{resolve, ResolvedDimensions};
