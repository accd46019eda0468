//! Low-level nom parsers for length and viewBox attribute values.

use crate::length::{Length, Unit};
use crate::viewport::ViewportRect;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize, verify},
    multi::separated_list1,
    number::complete::double,
};
use thiserror::Error;

/// Errors that can occur while parsing unit-bearing attribute values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("viewBox '{input}' has {found} numbers, expected 4")]
    ViewBoxArity { input: String, found: usize },

    #[error("viewBox '{input}' is invalid: {reason}")]
    InvalidViewBox { input: String, reason: &'static str },
}

// --- Helper Parsers ---

/// An unsigned integer or decimal literal (`12`, `1.5`, `.5`).
///
/// Literals too large to represent as a finite `f64` are rejected.
fn decimal(input: &str) -> IResult<&str, f64> {
    verify(
        map_res(
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
            |s: &str| s.parse::<f64>(),
        ),
        |value: &f64| value.is_finite(),
    )
    .parse(input)
}

fn unit_tag(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_alphabetic() || c == '%').parse(input)
}

fn list_separator(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_whitespace() || c == ',').parse(input)
}

/// Runs a parser over trimmed input and requires it to consume everything.
fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, UnitParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(UnitParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(UnitParseError::Parse(e.to_string())),
    }
}

// --- Length ---

fn length(input: &str) -> IResult<&str, Length> {
    map((decimal, unit_tag), |(value, tag)| {
        Length::new(value, Unit::from_tag(tag))
    })
    .parse(input)
}

/// Parses a length such as `"210mm"` or `"640"` into its magnitude and unit.
///
/// The unit is not validated here; `%` and unknown tags parse successfully
/// and are rejected at conversion time.
pub fn parse_length(input: &str) -> Result<Length, UnitParseError> {
    run_parser(length, input)
}

// --- ViewBox ---

fn number_list(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list1(list_separator, double).parse(input)
}

/// Parses a `viewBox` value: four numbers separated by whitespace and/or commas.
pub fn parse_view_box(input: &str) -> Result<ViewportRect, UnitParseError> {
    let numbers = run_parser(number_list, input)?;
    let &[min_x, min_y, width, height] = numbers.as_slice() else {
        return Err(UnitParseError::ViewBoxArity {
            input: input.to_string(),
            found: numbers.len(),
        });
    };

    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(UnitParseError::InvalidViewBox {
            input: input.to_string(),
            reason: "values must be finite",
        });
    }
    if width < 0.0 || height < 0.0 {
        return Err(UnitParseError::InvalidViewBox {
            input: input.to_string(),
            reason: "width and height must not be negative",
        });
    }

    Ok(ViewportRect::new(min_x, min_y, width, height))
}
