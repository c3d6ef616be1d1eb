//! Input validation and parsing for the calculator.
//!
//! Accepts exactly one binary expression of the form `<number><op><number>`
//! with no whitespace, where a number is an optional `-`, optional integer
//! digits, an optional `.` and at least one trailing digit.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::CalcError;

lazy_static! {
    /// Anchored matcher for a single binary expression.
    /// `\d` covers every Unicode decimal digit, not just ASCII.
    static ref BINARY_EXPRESSION: Regex = Regex::new(
        r"^(-?\d*\.?\d+)([-+*/])(-?\d*\.?\d+)$"
    ).unwrap();

    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();
}

/// A parsed `left op right` triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedExpression {
    pub left: f64,
    pub operator: char,
    pub right: f64,
}

/// Check if the input has at least one numeric character.
///
/// This is looser than the operand pattern: `²` counts here, so on its own
/// it is a format error rather than invalid input.
pub fn contains_digit(input: &str) -> bool {
    input.chars().any(char::is_numeric)
}

/// Parse a raw display buffer into a [`ParsedExpression`].
///
/// The digit check runs before the pattern match so that text without any
/// digits reports [`CalcError::InvalidInput`] rather than a format error.
pub fn parse_expression(input: &str) -> Result<ParsedExpression, CalcError> {
    if !contains_digit(input) {
        return Err(CalcError::InvalidInput);
    }

    let captures = BINARY_EXPRESSION
        .captures(input)
        .ok_or(CalcError::InvalidFormat)?;

    let left = parse_operand(&captures[1])?;
    let operator = captures[2]
        .chars()
        .next()
        .ok_or_else(|| CalcError::Unclassified("missing operator".to_string()))?;
    let right = parse_operand(&captures[3])?;

    Ok(ParsedExpression {
        left,
        operator,
        right,
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit.
///
/// Decimal digits are assigned in contiguous runs of ten, zero first, so the
/// value is the distance from the start of the run modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut code = c as u32;
    let mut offset = 0;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// Rewrite an operand's digits as ASCII so it can go through `f64` parsing.
fn to_ascii_operand(text: &str) -> String {
    text.chars()
        .map(|c| {
            decimal_value(c)
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Convert a matched operand to a number.
///
/// The pattern only admits valid decimal literals, so a failure here
/// means the pattern and the parser disagree.
fn parse_operand(text: &str) -> Result<f64, CalcError> {
    to_ascii_operand(text).parse::<f64>().map_err(|e| {
        tracing::warn!(operand = text, error = %e, "matched operand failed to parse");
        CalcError::Unclassified(format!("bad operand {text:?}: {e}"))
    })
}
