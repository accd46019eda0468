//! Unit-tagged lengths and their conversion to canonical pixels.
use crate::parsers::parse_length;
use std::fmt;

/// Pixels per inch of the canonical unit.
pub const PX_PER_INCH: f64 = 96.0;

/// A unit tag as it appears after a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
    /// Quarter-millimetre.
    Q,
    Percent,
    Unknown(String),
}

impl Unit {
    /// Maps a unit tag to a `Unit`. An empty tag is the canonical unit.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "" | "px" => Unit::Px,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "q" => Unit::Q,
            "%" => Unit::Percent,
            _ => Unit::Unknown(tag.to_string()),
        }
    }

    /// Multiplier from this unit to canonical pixels.
    ///
    /// Returns `None` for ratio-relative and unrecognized units. Those must
    /// never fall back to a ratio of 1.
    pub fn px_ratio(&self) -> Option<f64> {
        match self {
            Unit::Px => Some(1.0),
            Unit::Pt => Some(PX_PER_INCH / 72.0),
            Unit::Pc => Some(16.0),
            Unit::Mm => Some(PX_PER_INCH / 25.4),
            Unit::Cm => Some(PX_PER_INCH / 2.54),
            Unit::In => Some(PX_PER_INCH),
            Unit::Q => Some(PX_PER_INCH / 101.6),
            Unit::Percent | Unit::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Q => "q",
            Unit::Percent => "%",
            Unit::Unknown(tag) => tag,
        };
        f.write_str(tag)
    }
}

/// A numeric magnitude tagged with a unit, e.g. `12.5mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// The length in canonical pixels, or `None` if the unit cannot be resolved
    /// or the converted value overflows.
    pub fn to_px(&self) -> Option<f64> {
        self.unit
            .px_ratio()
            .map(|ratio| self.value * ratio)
            .filter(|px| px.is_finite())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Outcome of converting an attribute value to canonical pixels.
///
/// `Absent` means the attribute was not given; `Unresolvable` means it was
/// given but cannot be computed without layout context (or is malformed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalLength {
    Px(f64),
    Absent,
    Unresolvable,
}

impl CanonicalLength {
    /// Converts an optional attribute value. A missing attribute is `Absent`.
    pub fn from_attr(value: Option<&str>) -> Self {
        value.map(to_canonical).unwrap_or(CanonicalLength::Absent)
    }

    pub fn px(self) -> Option<f64> {
        match self {
            CanonicalLength::Px(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unresolvable(self) -> bool {
        matches!(self, CanonicalLength::Unresolvable)
    }
}

/// Converts a length string such as `"10mm"` to canonical pixels.
///
/// Empty input yields `Absent`. Malformed text, `%` and unknown unit tags
/// yield `Unresolvable`.
pub fn to_canonical(input: &str) -> CanonicalLength {
    if input.trim().is_empty() {
        return CanonicalLength::Absent;
    }
    match parse_length(input) {
        Ok(length) => length
            .to_px()
            .map(CanonicalLength::Px)
            .unwrap_or(CanonicalLength::Unresolvable),
        Err(_) => CanonicalLength::Unresolvable,
    }
}
