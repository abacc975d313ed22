//! Option type and terminal payoffs.
//!
//! Payoffs describe the value of an option at expiry as a function of the
//! underlying price. The finite-difference solvers sample them on the price
//! grid to build the initial value vectors.

use bsfd_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// Both types, call first.
    pub const BOTH: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Lowercase name, as used in config files and messages.
    pub fn name(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Terminal payoff of an option.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// The payoff given the underlying price at expiry.
    fn value(&self, price: Real) -> Real;

    /// Human-readable description.
    fn description(&self) -> String;
}

/// Plain vanilla payoff `max(φ(S − K), 0)`, `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn description(&self) -> String {
        format!("Vanilla {} @ {}", self.option_type, self.strike)
    }
}
