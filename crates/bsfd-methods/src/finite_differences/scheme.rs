//! Time-stepping scheme selection.

use bsfd_core::{errors::Error, Real};
use std::fmt;
use std::str::FromStr;

/// Finite difference time-stepping scheme.
///
/// All three are members of the θ-family: with `L` the discretised spatial
/// operator, one step back in time solves
/// `(I − θ·ΔT·L)·Vⁿ = (I + (1−θ)·ΔT·L)·Vⁿ⁺¹`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FdmScheme {
    /// Explicit: `Vⁿ = (I + ΔT·L)·Vⁿ⁺¹`. No solve, conditionally stable.
    Explicit,
    /// Fully implicit: `(I − ΔT·L)·Vⁿ = Vⁿ⁺¹`. Unconditionally stable.
    Implicit,
    /// Crank-Nicolson (θ = ½): second-order in time.
    CrankNicolson,
}

impl FdmScheme {
    /// All schemes, in selector order.
    pub const ALL: [FdmScheme; 3] = [
        FdmScheme::Explicit,
        FdmScheme::Implicit,
        FdmScheme::CrankNicolson,
    ];

    /// Weight θ of the implicit side.
    pub fn theta(self) -> Real {
        match self {
            FdmScheme::Explicit => 0.0,
            FdmScheme::Implicit => 1.0,
            FdmScheme::CrankNicolson => 0.5,
        }
    }

    /// The selector string accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            FdmScheme::Explicit => "explicit",
            FdmScheme::Implicit => "implicit",
            FdmScheme::CrankNicolson => "crank",
        }
    }

    /// Whether a time step needs a linear solve.
    pub fn needs_solve(self) -> bool {
        self.theta() > 0.0
    }

    /// Whether a time step applies an explicit operator.
    pub fn needs_apply(self) -> bool {
        self.theta() < 1.0
    }
}

impl fmt::Display for FdmScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FdmScheme {
    type Err = Error;

    /// Exact, case-sensitive match on `explicit`, `implicit` or `crank`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FdmScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| Error::UnsupportedScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selectors() {
        assert_eq!("explicit".parse::<FdmScheme>(), Ok(FdmScheme::Explicit));
        assert_eq!("implicit".parse::<FdmScheme>(), Ok(FdmScheme::Implicit));
        assert_eq!("crank".parse::<FdmScheme>(), Ok(FdmScheme::CrankNicolson));
    }

    #[test]
    fn rejects_unknown_selectors() {
        for bad in ["unknown", "Explicit", " crank", "crank-nicolson", ""] {
            assert_eq!(
                bad.parse::<FdmScheme>(),
                Err(Error::UnsupportedScheme(bad.to_string()))
            );
        }
    }

    #[test]
    fn theta_family() {
        assert_eq!(FdmScheme::Explicit.theta(), 0.0);
        assert_eq!(FdmScheme::Implicit.theta(), 1.0);
        assert_eq!(FdmScheme::CrankNicolson.theta(), 0.5);
        assert!(!FdmScheme::Explicit.needs_solve());
        assert!(!FdmScheme::Implicit.needs_apply());
        assert!(FdmScheme::CrankNicolson.needs_solve() && FdmScheme::CrankNicolson.needs_apply());
    }

    #[test]
    fn display_round_trips() {
        for scheme in FdmScheme::ALL {
            assert_eq!(scheme.to_string().parse::<FdmScheme>(), Ok(scheme));
        }
    }
}
