//! Reading option values off the price grid.

use super::grid::PriceGrid;
use bsfd_core::{ensure, errors::Result, Real};
use bsfd_math::Array;

/// Linearly interpolate `values` (one per grid node) at `spot`.
///
/// With `k = floor(S/ΔS)`:
/// `V(S) = V[k] + (V[k+1] − V[k])/ΔS · (S − k·ΔS)`.
///
/// # Errors
/// `Error::SpotOutOfRange` unless `0 ≤ spot < Smax`.
pub fn interpolate(values: &Array, grid: &PriceGrid, spot: Real) -> Result<Real> {
    ensure!(
        values.size() == grid.size(),
        "value vector has {} entries, grid has {}",
        values.size(),
        grid.size()
    );
    let k = grid.locate(spot)?;
    let slope = (values[k + 1] - values[k]) / grid.ds();
    Ok(values[k] + slope * (spot - grid.node(k)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bsfd_core::Error;

    #[test]
    fn exact_on_nodes() {
        let g = PriceGrid::new(10.0, 4).unwrap();
        let v = Array::from_slice(&[1.0, 2.0, 4.0, 8.0, 16.0]);
        for j in 0..4 {
            assert_abs_diff_eq!(interpolate(&v, &g, g.node(j)).unwrap(), v[j], epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_between_nodes() {
        let g = PriceGrid::new(10.0, 4).unwrap();
        let v = Array::from_slice(&[1.0, 2.0, 4.0, 8.0, 16.0]);
        // Between S=10 (4.0) and S=15 (8.0).
        assert_abs_diff_eq!(interpolate(&v, &g, 11.0).unwrap(), 4.8, epsilon = 1e-12);
        // Between S=15 (8.0) and S=20 (16.0).
        assert_abs_diff_eq!(interpolate(&v, &g, 19.0).unwrap(), 14.4, epsilon = 1e-12);
    }

    #[test]
    fn spot_outside_grid() {
        let g = PriceGrid::new(10.0, 4).unwrap();
        let v = Array::zeros(5);
        assert!(matches!(
            interpolate(&v, &g, 20.0),
            Err(Error::SpotOutOfRange { .. })
        ));
        assert!(interpolate(&v, &g, -0.1).is_err());
    }

    #[test]
    fn length_mismatch() {
        let g = PriceGrid::new(10.0, 4).unwrap();
        assert!(interpolate(&Array::zeros(3), &g, 5.0).is_err());
    }
}
