use crate::compositor::Side;
use tandem_units::UnitParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("document has no usable {missing}; it needs width/height attributes or a viewBox")]
    MissingDimensions { missing: &'static str },

    #[error("malformed viewBox '{value}': {source}")]
    MalformedViewport {
        value: String,
        #[source]
        source: UnitParseError,
    },

    #[error("gap must be a finite, non-negative number, got {0}")]
    InvalidGap(f64),

    #[error("{0} document has zero height and cannot be scaled to match")]
    DegenerateHeight(Side),
}
