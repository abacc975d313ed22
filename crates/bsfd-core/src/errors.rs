//! Error types for bsfd.
//!
//! Every fallible operation in the workspace returns [`Result`], carrying a
//! single `thiserror`-derived [`Error`] enum. The `ensure!` and `fail!`
//! macros keep precondition checks and computation failures to one line.

use std::fmt;
use thiserror::Error;

use crate::Real;

/// A named pricing input, used to tell the caller which field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Spot (closing) price of the underlying.
    Spot,
    /// Strike price.
    Strike,
    /// Annualised risk-free interest rate.
    InterestRate,
    /// Continuous dividend yield.
    DividendYield,
    /// Time to maturity.
    Maturity,
    /// Annualised volatility.
    Volatility,
    /// Number of price-space steps (`M`).
    SpaceSteps,
    /// Number of time steps (`N`).
    TimeSteps,
}

impl Field {
    /// Stable identifier, matching the request field names.
    pub fn key(self) -> &'static str {
        match self {
            Field::Spot => "spot",
            Field::Strike => "strike",
            Field::InterestRate => "interest_rate",
            Field::DividendYield => "dividend_yield",
            Field::Maturity => "maturity",
            Field::Volatility => "volatility",
            Field::SpaceSteps => "space_steps",
            Field::TimeSteps => "time_steps",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Spot => "spot price",
            Field::Strike => "strike price",
            Field::InterestRate => "interest rate",
            Field::DividendYield => "dividend yield",
            Field::Maturity => "maturity",
            Field::Volatility => "volatility",
            Field::SpaceSteps => "space steps (M)",
            Field::TimeSteps => "time steps (N)",
        };
        f.write_str(label)
    }
}

/// The top-level error type used throughout bsfd.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A pricing input could not be parsed or violates its precondition.
    #[error("invalid {field}: {reason}")]
    InvalidParameter {
        /// The offending input.
        field: Field,
        /// Human-readable explanation.
        reason: String,
    },

    /// The scheme selector is not one of `explicit`, `implicit`, `crank`.
    #[error("unsupported scheme `{0}` (expected one of: explicit, implicit, crank)")]
    UnsupportedScheme(String),

    /// The spot lies outside the price grid `[0, s_max)`.
    #[error("spot price {spot} is outside the price grid [0, {s_max})")]
    SpotOutOfRange {
        /// Requested spot.
        spot: Real,
        /// Upper end of the grid.
        s_max: Real,
    },

    /// Numerical failure: singular system, zero pivot or a diverged scheme.
    #[error("computation failed: {0}")]
    Computation(String),

    /// Internal precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// No market price was available and no fallback was supplied.
    #[error("no price available for `{0}`")]
    MissingQuote(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// The input responsible for the error, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::InvalidParameter { field, .. } => Some(*field),
            Error::SpotOutOfRange { .. } => Some(Field::Spot),
            _ => None,
        }
    }
}

/// Shorthand `Result` type used throughout bsfd.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsfd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bsfd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Computation(...))` immediately.
///
/// # Example
/// ```
/// use bsfd_core::{fail, errors::Error};
/// fn always_err() -> bsfd_core::errors::Result<()> {
///     fail!("zero pivot in row {}", 3);
/// }
/// assert!(matches!(always_err(), Err(Error::Computation(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Computation(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_field() {
        let e = Error::invalid(Field::SpaceSteps, "must be at least 2, got 0");
        assert_eq!(
            e.to_string(),
            "invalid space steps (M): must be at least 2, got 0"
        );
        assert_eq!(e.field(), Some(Field::SpaceSteps));
    }

    #[test]
    fn unsupported_scheme_message() {
        let e = Error::UnsupportedScheme("unknown".into());
        assert!(e.to_string().contains("`unknown`"));
        assert_eq!(e.field(), None);
    }

    #[test]
    fn spot_out_of_range_points_at_spot() {
        let e = Error::SpotOutOfRange {
            spot: 250.0,
            s_max: 200.0,
        };
        assert_eq!(e.field(), Some(Field::Spot));
    }

    #[test]
    fn field_keys_are_snake_case() {
        assert_eq!(Field::DividendYield.key(), "dividend_yield");
        assert_eq!(Field::TimeSteps.key(), "time_steps");
    }
}
