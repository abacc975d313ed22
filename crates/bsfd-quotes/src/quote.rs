//! `Quote` trait and the spot-price fallback chain.
//!
//! The spot is owned by an external market-data collaborator. When it cannot
//! produce a price, a manually entered value takes over instead of failing
//! the whole request.

use bsfd_core::{
    errors::{Error, Result},
    Real,
};
use tracing::warn;

/// A market-observable value.
pub trait Quote: std::fmt::Debug + Send + Sync {
    /// Return the current value.
    ///
    /// Returns `None` if the quote is not currently valid / set.
    fn value(&self) -> Option<Real>;

    /// Return `true` if the quote is currently valid.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

/// A simple, mutable market quote.
#[derive(Debug, Clone, Default)]
pub struct SimpleQuote {
    value: Option<Real>,
}

impl SimpleQuote {
    /// Create a new quote with the given value.
    pub fn new(value: Real) -> Self {
        Self { value: Some(value) }
    }

    /// Create an empty (invalid) quote.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Set a new value.
    pub fn set_value(&mut self, value: Real) {
        self.value = Some(value);
    }

    /// Clear the value, making the quote invalid.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        self.value
    }
}

impl<Q: Quote + ?Sized> Quote for Box<Q> {
    fn value(&self) -> Option<Real> {
        (**self).value()
    }
}

/// A quote that reads `primary` and falls back to `fallback` when the primary
/// has no usable (finite, positive) value.
#[derive(Debug)]
pub struct FallbackQuote<P: Quote, F: Quote> {
    primary: P,
    fallback: F,
}

impl<P: Quote, F: Quote> FallbackQuote<P, F> {
    /// Chain two quotes.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Quote, F: Quote> Quote for FallbackQuote<P, F> {
    fn value(&self) -> Option<Real> {
        match self.primary.value().filter(|v| is_usable(*v)) {
            Some(v) => Some(v),
            None => {
                let v = self.fallback.value().filter(|v| is_usable(*v));
                if v.is_some() {
                    warn!(primary = ?self.primary, "primary quote unavailable, using fallback");
                }
                v
            }
        }
    }
}

/// Resolve the spot price for `name` from `quote`, else from `manual`.
///
/// # Errors
/// [`Error::MissingQuote`] when neither source yields a positive finite
/// price.
pub fn resolve_spot(name: &str, quote: &dyn Quote, manual: Option<Real>) -> Result<Real> {
    if let Some(v) = quote.value().filter(|v| is_usable(*v)) {
        return Ok(v);
    }
    match manual.filter(|v| is_usable(*v)) {
        Some(v) => {
            warn!(ticker = name, manual = v, "no market price, using manual spot");
            Ok(v)
        }
        None => Err(Error::MissingQuote(name.to_string())),
    }
}

fn is_usable(v: Real) -> bool {
    v.is_finite() && v > 0.0
}
