//! `Array`: a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>`. The finite-difference
//! value vectors (one entry per price-grid node) are `Array`s.

use bsfd_core::Real;
use nalgebra::DVector;
use std::ops::{Index, IndexMut};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array whose `i`-th element is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> Real>(n: usize, mut f: F) -> Self {
        Self(DVector::from_fn(n, |i, _| f(i)))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Largest absolute element (0 for an empty array).
    pub fn max_abs(&self) -> Real {
        self.0.iter().fold(0.0, |acc: Real, x| acc.max(x.abs()))
    }

    /// `true` when no element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl From<DVector<Real>> for Array {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let a = Array::zeros(5);
        assert_eq!(a.size(), 5);
        assert_eq!(a[4], 0.0);
    }

    #[test]
    fn from_fn_fills_by_index() {
        let a = Array::from_fn(4, |i| (i * i) as Real);
        assert_eq!(a.as_slice(), &[0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn max_abs_and_finiteness() {
        let mut a = Array::from_slice(&[1.0, -7.5, 3.0]);
        assert_eq!(a.max_abs(), 7.5);
        assert!(a.is_finite());
        a[1] = Real::NAN;
        assert!(!a.is_finite());
    }

    #[test]
    fn display() {
        let a = Array::from_slice(&[1.0, 2.5]);
        assert_eq!(a.to_string(), "[1, 2.5]");
    }
}
