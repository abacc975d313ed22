//! Parsing of raw (string) pricing inputs.
//!
//! Dashboard and config inputs arrive as text. These helpers turn them into
//! numbers or report an [`Error::InvalidParameter`] naming the field.

use crate::errors::{Error, Field, Result};
use crate::Real;

/// Parse a finite real number, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] for empty, malformed or non-finite
/// input.
pub fn parse_real(field: Field, raw: &str) -> Result<Real> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(Error::invalid(field, "a value is required"));
    }
    let value: Real = s
        .parse()
        .map_err(|_| Error::invalid(field, format!("`{s}` is not a number")))?;
    if !value.is_finite() {
        return Err(Error::invalid(field, format!("`{s}` is not finite")));
    }
    Ok(value)
}

/// Parse a non-negative whole number such as a grid step count.
///
/// Integral decimals (`"100.0"`) are accepted since numeric form inputs
/// often render whole numbers that way.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] for negative, fractional or malformed
/// input.
pub fn parse_count(field: Field, raw: &str) -> Result<usize> {
    let s = raw.trim();
    if let Ok(n) = s.parse::<usize>() {
        return Ok(n);
    }
    let value = parse_real(field, s)?;
    if value < 0.0 {
        return Err(Error::invalid(field, format!("must be non-negative, got {s}")));
    }
    if value.fract() != 0.0 || value > usize::MAX as Real {
        return Err(Error::invalid(field, format!("`{s}` is not a whole number")));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real(Field::Spot, " 101.25 "), Ok(101.25));
        assert_eq!(parse_real(Field::Spot, "5"), Ok(5.0));
        assert_eq!(parse_real(Field::Spot, "-0.5"), Ok(-0.5));
    }

    #[test]
    fn test_parse_real_rejects_garbage() {
        let err = parse_real(Field::Volatility, "twenty").unwrap_err();
        assert_eq!(err.field(), Some(Field::Volatility));
        assert!(parse_real(Field::Strike, "").is_err());
        assert!(parse_real(Field::Strike, "NaN").is_err());
        assert!(parse_real(Field::Strike, "inf").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Field::SpaceSteps, "100"), Ok(100));
        assert_eq!(parse_count(Field::SpaceSteps, "100.0"), Ok(100));
        assert_eq!(parse_count(Field::TimeSteps, " 0 "), Ok(0));
    }

    #[test]
    fn test_parse_count_rejects_fractions_and_negatives() {
        let err = parse_count(Field::TimeSteps, "12.5").unwrap_err();
        assert_eq!(err.field(), Some(Field::TimeSteps));
        assert!(parse_count(Field::SpaceSteps, "-3").is_err());
        assert!(parse_count(Field::SpaceSteps, "abc").is_err());
    }

    proptest::proptest! {
        #[test]
        fn counts_parse_in_either_form(n in 0usize..1_000_000) {
            proptest::prop_assert_eq!(parse_count(Field::TimeSteps, &n.to_string()), Ok(n));
            proptest::prop_assert_eq!(parse_count(Field::TimeSteps, &format!(" {n}.0 ")), Ok(n));
        }

        #[test]
        fn surrounding_whitespace_is_ignored(x in -1e6f64..1e6) {
            let s = x.to_string();
            proptest::prop_assert_eq!(
                parse_real(Field::Spot, &format!("\t{s}  ")),
                parse_real(Field::Spot, &s)
            );
        }
    }
}
