//! Backward time stepping of the call and put value vectors.
//!
//! Starting from the terminal payoffs, each step produces the layer one `ΔT`
//! closer to today:
//!
//! 1. apply the explicit side `I + (1−θ)ΔT·L` (skipped when θ = 1),
//! 2. overwrite nodes `0` and `M` with the boundary values,
//! 3. solve the implicit side `I − θΔT·L` (skipped when θ = 0),
//! 4. overwrite the boundary nodes again.
//!
//! The boundary values use the remaining time of the layer being produced.

use super::boundary::DirichletBoundaries;
use super::coefficients::StencilCoefficients;
use super::grid::{PriceGrid, TimeGrid};
use super::interpolator::interpolate;
use super::scheme::FdmScheme;
use super::solver::{AssembledOperator, FactoredOperator, SolverBackend};
use bsfd_core::{
    errors::{Error, Field, Result},
    fail, Real, Size, Time,
};
use bsfd_instruments::{EuropeanOptionArguments, OptionPrices, OptionType, PlainVanillaPayoff};
use bsfd_math::Array;
use tracing::{debug, debug_span, trace, warn};

/// Values larger than this multiple of the largest no-arbitrage magnitude
/// on the grid mean the scheme blew up.
pub const DIVERGENCE_MULTIPLE: Real = 2.0;

/// Largest accepted number of price intervals `M`.
pub const MAX_SPACE_STEPS: Size = 100_000;

/// Largest accepted number of time steps `N`.
pub const MAX_TIME_STEPS: Size = 1_000_000;

/// Largest `M` for the dense back-end, which stores `(M + 1)²` entries.
pub const MAX_DENSE_SPACE_STEPS: Size = 2_000;

/// Grid resolution, scheme and linear-algebra back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdmSettings {
    /// Price intervals `M`; the grid has `M + 1` nodes.
    pub space_steps: Size,
    /// Time steps `N`.
    pub time_steps: Size,
    /// Time-stepping scheme.
    pub scheme: FdmScheme,
    /// Operator storage and solver.
    pub backend: SolverBackend,
}

impl Default for FdmSettings {
    fn default() -> Self {
        Self {
            space_steps: 100,
            time_steps: 100,
            scheme: FdmScheme::CrankNicolson,
            backend: SolverBackend::Tridiagonal,
        }
    }
}

impl FdmSettings {
    /// Settings with the default back-end.
    pub fn new(space_steps: Size, time_steps: Size, scheme: FdmScheme) -> Self {
        Self {
            space_steps,
            time_steps,
            scheme,
            backend: SolverBackend::default(),
        }
    }

    /// Replace the back-end.
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    /// `2 ≤ M ≤ MAX_SPACE_STEPS` (`MAX_DENSE_SPACE_STEPS` for the dense
    /// back-end) and `1 ≤ N ≤ MAX_TIME_STEPS`.
    pub fn validate(&self) -> Result<()> {
        if self.space_steps < 2 {
            return Err(Error::invalid(
                Field::SpaceSteps,
                format!("must be at least 2, got {}", self.space_steps),
            ));
        }
        let max_space_steps = match self.backend {
            SolverBackend::Tridiagonal => MAX_SPACE_STEPS,
            SolverBackend::DenseLu => MAX_DENSE_SPACE_STEPS,
        };
        if self.space_steps > max_space_steps {
            return Err(Error::invalid(
                Field::SpaceSteps,
                format!(
                    "must be at most {max_space_steps} with the {} back-end, got {}",
                    self.backend, self.space_steps
                ),
            ));
        }
        if self.time_steps < 1 {
            return Err(Error::invalid(
                Field::TimeSteps,
                format!("must be at least 1, got {}", self.time_steps),
            ));
        }
        if self.time_steps > MAX_TIME_STEPS {
            return Err(Error::invalid(
                Field::TimeSteps,
                format!("must be at most {MAX_TIME_STEPS}, got {}", self.time_steps),
            ));
        }
        Ok(())
    }
}

/// The operators one time step needs, by scheme.
#[derive(Debug, Clone)]
enum StepStrategy {
    Explicit { forward: AssembledOperator },
    Implicit { backward: FactoredOperator },
    CrankNicolson {
        forward: AssembledOperator,
        backward: FactoredOperator,
    },
}

impl StepStrategy {
    fn new(
        coefficients: &StencilCoefficients,
        scheme: FdmScheme,
        dt: Time,
        backend: SolverBackend,
    ) -> Result<Self> {
        let theta = scheme.theta();
        let forward = || {
            AssembledOperator::new(coefficients.explicit_operator((1.0 - theta) * dt), backend)
        };
        let backward =
            || FactoredOperator::new(&coefficients.implicit_operator(theta * dt), backend);
        Ok(match scheme {
            FdmScheme::Explicit => StepStrategy::Explicit { forward: forward() },
            FdmScheme::Implicit => StepStrategy::Implicit {
                backward: backward()?,
            },
            FdmScheme::CrankNicolson => StepStrategy::CrankNicolson {
                forward: forward(),
                backward: backward()?,
            },
        })
    }

    fn explicit_half(&self, values: &Array) -> Result<Array> {
        match self {
            StepStrategy::Explicit { forward } | StepStrategy::CrankNicolson { forward, .. } => {
                forward.apply(values)
            }
            StepStrategy::Implicit { .. } => Ok(values.clone()),
        }
    }

    fn implicit_half(&self, rhs: Array) -> Result<Array> {
        match self {
            StepStrategy::Implicit { backward } | StepStrategy::CrankNicolson { backward, .. } => {
                backward.solve(&rhs)
            }
            StepStrategy::Explicit { .. } => Ok(rhs),
        }
    }
}

/// Value vectors at `t = 0`, one entry per price-grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLayers {
    /// Call values.
    pub call: Array,
    /// Put values.
    pub put: Array,
}

impl ValueLayers {
    /// The vector for `option_type`.
    pub fn get(&self, option_type: OptionType) -> &Array {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}

/// Finite-difference solver for a European call/put pair under
/// Black-Scholes dynamics on the uniform grid `[0, 2K]`.
///
/// Operators are built and factored once in [`new`](Self::new); both
/// option types are rolled back with them.
#[derive(Debug, Clone)]
pub struct FdBlackScholesSolver {
    arguments: EuropeanOptionArguments,
    settings: FdmSettings,
    price_grid: PriceGrid,
    time_grid: TimeGrid,
    boundaries: DirichletBoundaries,
    strategy: StepStrategy,
    divergence_bound: Real,
}

impl FdBlackScholesSolver {
    /// Validate the inputs, build the grids and factor the operators.
    ///
    /// # Errors
    /// `InvalidParameter` for out-of-domain arguments or settings,
    /// `Computation` if the implicit operator cannot be factored.
    pub fn new(arguments: &EuropeanOptionArguments, settings: FdmSettings) -> Result<Self> {
        arguments.validate()?;
        settings.validate()?;

        let price_grid = PriceGrid::new(arguments.strike, settings.space_steps)?;
        let time_grid = TimeGrid::new(arguments.maturity, settings.time_steps)?;
        let coefficients = StencilCoefficients::black_scholes(
            settings.space_steps,
            arguments.risk_free_rate,
            arguments.dividend_yield,
            arguments.volatility,
        );

        if settings.scheme == FdmScheme::Explicit {
            let ratio = coefficients.explicit_stability_ratio(time_grid.dt());
            if ratio > 1.0 {
                warn!(
                    ratio,
                    space_steps = settings.space_steps,
                    time_steps = settings.time_steps,
                    "explicit scheme outside its stability region; increase the time steps"
                );
            }
        }

        let strategy = StepStrategy::new(
            &coefficients,
            settings.scheme,
            time_grid.dt(),
            settings.backend,
        )?;
        debug!(
            scheme = %settings.scheme,
            backend = %settings.backend,
            s_max = price_grid.s_max(),
            ds = price_grid.ds(),
            dt = time_grid.dt(),
            "finite-difference solver ready"
        );

        // No-arbitrage values stay within Smax·e^{−qT} and K·e^{−rT}.
        let t = arguments.maturity;
        let divergence_bound = DIVERGENCE_MULTIPLE
            * (price_grid.s_max() * (-arguments.dividend_yield * t).exp().max(1.0))
                .max(arguments.strike * (-arguments.risk_free_rate * t).exp().max(1.0));

        Ok(Self {
            arguments: *arguments,
            settings,
            boundaries: DirichletBoundaries::new(
                price_grid.s_max(),
                arguments.strike,
                arguments.risk_free_rate,
            ),
            price_grid,
            time_grid,
            strategy,
            divergence_bound,
        })
    }

    /// The price grid.
    pub fn price_grid(&self) -> &PriceGrid {
        &self.price_grid
    }

    /// The time grid.
    pub fn time_grid(&self) -> &TimeGrid {
        &self.time_grid
    }

    /// The settings used.
    pub fn settings(&self) -> &FdmSettings {
        &self.settings
    }

    /// Roll the terminal payoffs back to `t = 0`.
    ///
    /// # Errors
    /// `Computation` when a value stops being finite or exceeds
    /// [`DIVERGENCE_MULTIPLE`] times the larger of `Smax·max(1, e^{−qT})` and
    /// `K·max(1, e^{−rT})` in magnitude, i.e. the scheme diverged.
    pub fn rollback(&self) -> Result<ValueLayers> {
        let _span = debug_span!(
            "fd_rollback",
            scheme = %self.settings.scheme,
            m = self.settings.space_steps,
            n = self.settings.time_steps
        )
        .entered();

        let strike = self.arguments.strike;
        let mut call = self
            .price_grid
            .sample(&PlainVanillaPayoff::new(OptionType::Call, strike));
        let mut put = self
            .price_grid
            .sample(&PlainVanillaPayoff::new(OptionType::Put, strike));

        for k in 1..=self.time_grid.steps() {
            let remaining = self.time_grid.remaining(k);
            call = self.step(OptionType::Call, &call, remaining)?;
            put = self.step(OptionType::Put, &put, remaining)?;
            self.ensure_bounded(OptionType::Call, &call, k)?;
            self.ensure_bounded(OptionType::Put, &put, k)?;
            trace!(step = k, remaining, "layer produced");
        }

        Ok(ValueLayers { call, put })
    }

    /// Prices at `spot`, interpolated from the `t = 0` layers.
    pub fn price(&self, spot: Real) -> Result<OptionPrices> {
        let layers = self.rollback()?;
        Ok(OptionPrices::new(
            interpolate(&layers.call, &self.price_grid, spot)?,
            interpolate(&layers.put, &self.price_grid, spot)?,
        ))
    }

    /// Prices at the spot held in the arguments.
    pub fn npv(&self) -> Result<OptionPrices> {
        self.price(self.arguments.spot)
    }

    fn step(&self, option_type: OptionType, values: &Array, remaining: Time) -> Result<Array> {
        let mut rhs = self.strategy.explicit_half(values)?;
        self.boundaries.apply(option_type, &mut rhs, remaining);
        let mut next = self.strategy.implicit_half(rhs)?;
        self.boundaries.apply(option_type, &mut next, remaining);
        Ok(next)
    }

    fn ensure_bounded(&self, option_type: OptionType, values: &Array, step: Size) -> Result<()> {
        let bound = self.divergence_bound;
        if !values.is_finite() || values.max_abs() > bound {
            fail!(
                "{} scheme diverged at step {step} of {}: {} values exceed {bound}; \
                 refine the time grid",
                self.settings.scheme,
                self.time_grid.steps(),
                option_type.name()
            );
        }
        Ok(())
    }
}
