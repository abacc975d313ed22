//! Standard normal distribution, delegating to `statrs`.

use bsfd_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// The standard normal probability density function φ(x).
pub fn normal_pdf(x: Real) -> Real {
    Normal::standard().pdf(x)
}

/// The standard normal cumulative distribution function Φ(x).
pub fn normal_cdf(x: Real) -> Real {
    Normal::standard().cdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cdf_reference_values() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_cdf(1.959_963_984_540_054), 0.975, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_cdf(-1.0) + normal_cdf(1.0), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn pdf_peak() {
        assert_abs_diff_eq!(
            normal_pdf(0.0),
            1.0 / (2.0 * std::f64::consts::PI).sqrt(),
            epsilon = 1e-15
        );
    }
}
