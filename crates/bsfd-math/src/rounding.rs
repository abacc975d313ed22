//! Decimal rounding of quoted prices.

use bsfd_core::Real;

/// Number of decimals prices are reported with.
pub const PRICE_DECIMALS: i32 = 2;

/// Round `value` to `precision` decimal places, ties away from zero.
pub fn round(value: Real, precision: i32) -> Real {
    let mult = 10_f64.powi(precision);
    (value * mult).round() / mult
}

/// Round a price to cents, the precision every pricing result is quoted in.
pub fn round_price(value: Real) -> Real {
    round(value, PRICE_DECIMALS)
}
