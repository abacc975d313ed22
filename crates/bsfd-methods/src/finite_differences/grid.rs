//! Uniform price and time grids.

use bsfd_core::{
    ensure,
    errors::{Error, Result},
    Real, Size, Time,
};
use bsfd_instruments::Payoff;
use bsfd_math::Array;

/// Upper end of the price grid as a multiple of the strike.
pub const S_MAX_MULTIPLE: Real = 2.0;

/// Uniform grid over underlying prices `[0, Smax]`, `Smax = 2K`.
///
/// Node `j` sits at `S_j = j·ΔS` for `j = 0..=M`. The strike need not
/// coincide with a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceGrid {
    s_max: Real,
    ds: Real,
    space_steps: Size,
}

impl PriceGrid {
    /// Build the grid for `strike` with `space_steps` (`M`) intervals.
    pub fn new(strike: Real, space_steps: Size) -> Result<Self> {
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(space_steps >= 2, "need at least 2 space steps, got {space_steps}");
        let s_max = S_MAX_MULTIPLE * strike;
        Ok(Self {
            s_max,
            ds: s_max / space_steps as Real,
            space_steps,
        })
    }

    /// Upper price bound `Smax`.
    pub fn s_max(&self) -> Real {
        self.s_max
    }

    /// Node spacing `ΔS`.
    pub fn ds(&self) -> Real {
        self.ds
    }

    /// Number of intervals `M`.
    pub fn space_steps(&self) -> Size {
        self.space_steps
    }

    /// Number of nodes, `M + 1`.
    pub fn size(&self) -> Size {
        self.space_steps + 1
    }

    /// Price at node `j`.
    pub fn node(&self, j: Size) -> Real {
        j as Real * self.ds
    }

    /// All node prices.
    pub fn nodes(&self) -> Array {
        Array::from_fn(self.size(), |j| self.node(j))
    }

    /// The payoff sampled at every node.
    pub fn sample(&self, payoff: &dyn Payoff) -> Array {
        Array::from_fn(self.size(), |j| payoff.value(self.node(j)))
    }

    /// Index `k = floor(S/ΔS)` of the node at or below `spot`.
    ///
    /// # Errors
    /// [`Error::SpotOutOfRange`] unless `0 ≤ spot < Smax`, i.e. `0 ≤ k < M`.
    pub fn locate(&self, spot: Real) -> Result<Size> {
        if !(spot >= 0.0 && spot < self.s_max) {
            return Err(Error::SpotOutOfRange {
                spot,
                s_max: self.s_max,
            });
        }
        let k = (spot / self.ds).floor() as Size;
        // Rounding in the division can land exactly on M just below Smax.
        Ok(k.min(self.space_steps - 1))
    }
}

/// Uniform time discretisation: `N` steps of `ΔT = T/N`.
///
/// Only the step count and size are stored; layers are produced one at a
/// time by the stepping engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    maturity: Time,
    steps: Size,
    dt: Time,
}

impl TimeGrid {
    /// Split `maturity` (years) into `steps` equal steps.
    pub fn new(maturity: Time, steps: Size) -> Result<Self> {
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        ensure!(steps >= 1, "need at least 1 time step, got {steps}");
        Ok(Self {
            maturity,
            steps,
            dt: maturity / steps as Real,
        })
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Number of steps `N`.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Step size `ΔT`.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Time remaining to maturity after `k` steps back from expiry.
    pub fn remaining(&self, k: Size) -> Time {
        k as Real * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bsfd_instruments::{OptionType, PlainVanillaPayoff};

    #[test]
    fn grid_spans_zero_to_twice_strike() {
        let g = PriceGrid::new(100.0, 100).unwrap();
        assert_eq!(g.s_max(), 200.0);
        assert_eq!(g.ds(), 2.0);
        assert_eq!(g.size(), 101);
        let nodes = g.nodes();
        assert_eq!(nodes[0], 0.0);
        assert_abs_diff_eq!(nodes[100], 200.0, epsilon = 1e-12);
        assert_abs_diff_eq!(nodes[50], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn strike_need_not_be_a_node() {
        let g = PriceGrid::new(100.0, 3).unwrap();
        assert!((0..=3).all(|j| (g.node(j) - 100.0).abs() > 1.0));
    }

    #[test]
    fn payoff_vectors() {
        let g = PriceGrid::new(10.0, 4).unwrap();
        let call = g.sample(&PlainVanillaPayoff::new(OptionType::Call, 10.0));
        let put = g.sample(&PlainVanillaPayoff::new(OptionType::Put, 10.0));
        assert_eq!(call.as_slice(), &[0.0, 0.0, 0.0, 5.0, 10.0]);
        assert_eq!(put.as_slice(), &[10.0, 5.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn locate_spot() {
        let g = PriceGrid::new(100.0, 100).unwrap();
        assert_eq!(g.locate(100.0), Ok(50));
        assert_eq!(g.locate(101.3), Ok(50));
        assert_eq!(g.locate(0.0), Ok(0));
        assert_eq!(g.locate(199.999), Ok(99));
    }

    #[test]
    fn locate_rejects_spot_at_or_above_s_max() {
        let g = PriceGrid::new(100.0, 100).unwrap();
        for spot in [200.0, 250.0, -1.0, Real::NAN] {
            assert!(matches!(g.locate(spot), Err(Error::SpotOutOfRange { .. })));
        }
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(PriceGrid::new(100.0, 1).is_err());
        assert!(PriceGrid::new(0.0, 10).is_err());
        assert!(TimeGrid::new(1.0, 0).is_err());
        assert!(TimeGrid::new(0.0, 10).is_err());
    }

    #[test]
    fn time_grid() {
        let t = TimeGrid::new(1.0, 4).unwrap();
        assert_eq!(t.dt(), 0.25);
        assert_eq!(t.steps(), 4);
        assert_eq!(t.remaining(0), 0.0);
        assert_eq!(t.remaining(4), 1.0);
        let single = TimeGrid::new(0.5, 1).unwrap();
        assert_eq!(single.dt(), 0.5);
    }

    proptest::proptest! {
        #[test]
        fn located_node_brackets_spot(
            strike in 1.0f64..500.0,
            m in 2usize..400,
            frac in 0.0f64..1.0,
        ) {
            let g = PriceGrid::new(strike, m).unwrap();
            let spot = frac * g.s_max();
            let k = g.locate(spot).unwrap();
            proptest::prop_assert!(k < m);
            proptest::prop_assert!(g.node(k) <= spot + 1e-9);
            proptest::prop_assert!(spot < g.node(k + 1) + 1e-9);
        }
    }
}
