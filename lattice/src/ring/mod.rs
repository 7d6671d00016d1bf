use std::fmt::Debug;

use algebra::random::sample_uniform_values;
use algebra::reduce::{Reduce, ReduceAdd, ReduceMul, ReduceSub};
use algebra::{AlgebraError, Modulus};
use rand::{CryptoRng, Rng};

mod polynomial;
mod scalar;

pub use polynomial::PolynomialRing;
pub use scalar::ScalarRing;

/// The coefficient ring a public-key scheme works over.
///
/// An *element* is what the public equations `A` and the secret are made of,
/// an *evaluation* is the result `A∘s` of combining an equation with the secret.
/// Both are backed by coordinate vectors in `[0, q)`, so addition, subtraction
/// and scaling are shared here and only [`multiply`](RingArithmetic::multiply)
/// is specific to a ring.
pub trait RingArithmetic: Clone + Debug {
    /// The type of the equations and of the secret.
    type Element: Clone + Debug + PartialEq + Eq;
    /// The type of `A∘s`.
    type Evaluation: Clone + Debug + PartialEq + Eq;

    /// Returns the modulus `q`.
    fn modulus(&self) -> Modulus;

    /// Returns the number of coordinates of an element, refers to **n**.
    fn dimension(&self) -> usize;

    /// Returns the number of coordinates of an evaluation.
    fn evaluation_width(&self) -> usize;

    /// Wraps coordinates as an element.
    fn element_from_values(&self, values: Vec<u64>) -> Self::Element;

    /// Returns the coordinates of an element.
    fn element_values<'a>(&self, element: &'a Self::Element) -> &'a [u64];

    /// Returns the mutable coordinates of an element.
    fn element_values_mut<'a>(&self, element: &'a mut Self::Element) -> &'a mut [u64];

    /// Wraps coordinates as an evaluation.
    fn evaluation_from_values(&self, values: Vec<u64>) -> Self::Evaluation;

    /// Returns the coordinates of an evaluation.
    fn evaluation_values<'a>(&self, evaluation: &'a Self::Evaluation) -> &'a [u64];

    /// Returns the mutable coordinates of an evaluation.
    fn evaluation_values_mut<'a>(&self, evaluation: &'a mut Self::Evaluation) -> &'a mut [u64];

    /// Computes the canonical `a∘s`.
    fn multiply(
        &self,
        a: &Self::Element,
        secret: &Self::Element,
    ) -> Result<Self::Evaluation, AlgebraError>;

    /// Samples an element with coordinates uniform in `[0, q)`.
    #[inline]
    fn sample_element<R>(&self, rng: &mut R) -> Self::Element
    where
        R: Rng + CryptoRng,
    {
        self.element_from_values(sample_uniform_values(self.modulus(), self.dimension(), rng))
    }

    /// Returns `true` if `element` has `n` coordinates and every coordinate is in `[0, q)`.
    #[inline]
    fn is_canonical_element(&self, element: &Self::Element) -> bool {
        let values = self.element_values(element);
        values.len() == self.dimension() && values.iter().all(|&v| self.modulus().is_canonical(v))
    }

    /// Reduces every coordinate of `element` into `[0, q)`.
    #[inline]
    fn canonicalize_element(&self, mut element: Self::Element) -> Self::Element {
        let q = self.modulus();
        self.element_values_mut(&mut element)
            .iter_mut()
            .for_each(|v| *v = q.reduce(*v));
        element
    }

    /// Reduces every coordinate of `evaluation` into `[0, q)`.
    #[inline]
    fn canonicalize_evaluation(&self, mut evaluation: Self::Evaluation) -> Self::Evaluation {
        let q = self.modulus();
        self.evaluation_values_mut(&mut evaluation)
            .iter_mut()
            .for_each(|v| *v = q.reduce(*v));
        evaluation
    }

    /// Computes `a + b`.
    fn add_elements(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let q = self.modulus();
        let mut sum = a.clone();
        self.element_values_mut(&mut sum)
            .iter_mut()
            .zip(self.element_values(b))
            .for_each(|(x, &y)| *x = q.reduce_add(*x, y));
        sum
    }

    /// Computes `a + b`.
    fn add_evaluations(&self, a: &Self::Evaluation, b: &Self::Evaluation) -> Self::Evaluation {
        let q = self.modulus();
        let mut sum = a.clone();
        self.evaluation_values_mut(&mut sum)
            .iter_mut()
            .zip(self.evaluation_values(b))
            .for_each(|(x, &y)| *x = q.reduce_add(*x, y));
        sum
    }

    /// Computes `a - b`.
    fn sub_evaluations(&self, a: &Self::Evaluation, b: &Self::Evaluation) -> Self::Evaluation {
        let q = self.modulus();
        let mut difference = a.clone();
        self.evaluation_values_mut(&mut difference)
            .iter_mut()
            .zip(self.evaluation_values(b))
            .for_each(|(x, &y)| *x = q.reduce_sub(*x, y));
        difference
    }

    /// Computes `k * evaluation`.
    fn scale_evaluation(&self, evaluation: &Self::Evaluation, k: u64) -> Self::Evaluation {
        let q = self.modulus();
        let k = q.reduce(k);
        let mut scaled = evaluation.clone();
        self.evaluation_values_mut(&mut scaled)
            .iter_mut()
            .for_each(|x| *x = q.reduce_mul(*x, k));
        scaled
    }

    /// Adds signed values, e.g. errors, coordinate-wise.
    fn add_signed_assign(&self, evaluation: &mut Self::Evaluation, values: &[i64]) {
        let q = self.modulus();
        debug_assert_eq!(self.evaluation_values(evaluation).len(), values.len());
        self.evaluation_values_mut(evaluation)
            .iter_mut()
            .zip(values)
            .for_each(|(x, &e)| *x = q.reduce_add(*x, q.reduce(e)));
    }
}
