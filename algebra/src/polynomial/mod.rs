//! Dense univariate polynomials over `Z_q`.

use std::ops::Index;
use std::slice::{Iter, IterMut};

use num_traits::ConstZero;

mod arith;
mod display;

/// Represents a polynomial whose coefficients are integers modulo some `q`.
///
/// The coefficients of the polynomial are stored in a vector `data`, with the `i`-th element
/// representing the coefficient of the `xⁱ` term. The vector is ordered from the constant term
/// at index 0 to the highest term.
///
/// # Examples
/// ```
/// use algebra::Polynomial;
///
/// let poly = Polynomial::new(vec![1u64, 2, 3]);
/// // `poly` now represents the polynomial 1 + 2x + 3x^2.
/// assert_eq!(poly.to_string(), "3x^2 + 2x + 1");
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial<T> {
    data: Vec<T>,
}

impl<T> Polynomial<T> {
    /// Creates a new [`Polynomial<T>`].
    #[inline]
    pub fn new(polynomial: Vec<T>) -> Self {
        Self { data: polynomial }
    }

    /// Returns a reference to the data of this [`Polynomial<T>`].
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Drop self, and return the data.
    #[inline]
    pub fn inner_data(self) -> Vec<T> {
        self.data
    }

    /// Get the coefficient counts of polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator that allows reading each value or coefficient of the polynomial.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each value or coefficient of the polynomial.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        self.data.iter_mut()
    }
}

impl<T: Clone> Polynomial<T> {
    /// Constructs a new polynomial from a slice.
    #[inline]
    pub fn from_slice(polynomial: &[T]) -> Self {
        Self::new(polynomial.to_vec())
    }
}

impl<T: Copy + ConstZero> Polynomial<T> {
    /// Creates a [`Polynomial<T>`] with all coefficients equal to zero.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![T::ZERO; coeff_count],
        }
    }

    /// Returns `true` if `self` is equal to `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(T::is_zero)
    }

    /// Returns the degree of `self`, ignoring leading zero coefficients.
    ///
    /// The zero polynomial has no degree.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.data.iter().rposition(|c| !c.is_zero())
    }

    /// Creates the polynomial `x^n + 1`.
    pub fn negacyclic_quotient(n: usize) -> Self
    where
        T: num_traits::ConstOne,
    {
        let mut data = vec![T::ZERO; n + 1];
        data[0] = T::ONE;
        data[n] = T::ONE;
        Self { data }
    }
}

impl<T> From<Vec<T>> for Polynomial<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> AsRef<[T]> for Polynomial<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
