use algebra::reduce::{Reduce, TryReduceInv};
use algebra::{AlgebraError, Modulus, Polynomial};

use super::RingArithmetic;

/// The polynomial ring `Z_q[x]/(φ(x))` used by RLWE.
///
/// Elements and evaluations are polynomials of degree `< deg(φ)`,
/// and `a∘s` is the product reduced by `φ`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialRing {
    modulus: Modulus,
    quotient: Polynomial<u64>,
    dimension: usize,
}

impl PolynomialRing {
    /// Creates a new [`PolynomialRing`] with quotient `φ(x)`.
    ///
    /// # Errors
    ///
    /// Fails if `quotient` is a constant or its leading
    /// coefficient has no inverse modulo `q`.
    pub fn new(modulus: Modulus, quotient: Polynomial<u64>) -> Result<Self, AlgebraError> {
        let degree = match quotient.degree() {
            None => return Err(AlgebraError::ZeroDivisor),
            Some(0) => return Err(AlgebraError::ConstantQuotient),
            Some(degree) => degree,
        };
        modulus.try_reduce_inv(quotient[degree])?;

        // trailing zero coefficients do not change the ring
        let quotient = Polynomial::from_slice(&quotient.data()[..=degree]);

        Ok(Self {
            modulus,
            quotient,
            dimension: degree,
        })
    }

    /// Creates the ring `Z_q[x]/(x^n + 1)`.
    #[inline]
    pub fn negacyclic(modulus: Modulus, dimension: usize) -> Result<Self, AlgebraError> {
        Self::new(modulus, Polynomial::negacyclic_quotient(dimension))
    }

    /// Returns the quotient polynomial `φ(x)`.
    #[inline]
    pub fn quotient(&self) -> &Polynomial<u64> {
        &self.quotient
    }
}

impl RingArithmetic for PolynomialRing {
    type Element = Polynomial<u64>;
    type Evaluation = Polynomial<u64>;

    #[inline]
    fn modulus(&self) -> Modulus {
        self.modulus
    }

    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn evaluation_width(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn element_from_values(&self, values: Vec<u64>) -> Self::Element {
        Polynomial::new(values)
    }

    #[inline]
    fn element_values<'a>(&self, element: &'a Self::Element) -> &'a [u64] {
        element.as_slice()
    }

    #[inline]
    fn element_values_mut<'a>(&self, element: &'a mut Self::Element) -> &'a mut [u64] {
        element.as_mut_slice()
    }

    #[inline]
    fn evaluation_from_values(&self, values: Vec<u64>) -> Self::Evaluation {
        Polynomial::new(values)
    }

    #[inline]
    fn evaluation_values<'a>(&self, evaluation: &'a Self::Evaluation) -> &'a [u64] {
        evaluation.as_slice()
    }

    #[inline]
    fn evaluation_values_mut<'a>(&self, evaluation: &'a mut Self::Evaluation) -> &'a mut [u64] {
        evaluation.as_mut_slice()
    }

    #[inline]
    fn multiply(
        &self,
        a: &Self::Element,
        secret: &Self::Element,
    ) -> Result<Self::Evaluation, AlgebraError> {
        a.mul_rem_reduce(secret, &self.quotient, self.modulus)
    }

    #[inline]
    fn add_elements(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.add_reduce(b, self.modulus)
    }

    #[inline]
    fn add_evaluations(&self, a: &Self::Evaluation, b: &Self::Evaluation) -> Self::Evaluation {
        a.add_reduce(b, self.modulus)
    }

    #[inline]
    fn sub_evaluations(&self, a: &Self::Evaluation, b: &Self::Evaluation) -> Self::Evaluation {
        a.sub_reduce(b, self.modulus)
    }

    #[inline]
    fn scale_evaluation(&self, evaluation: &Self::Evaluation, k: u64) -> Self::Evaluation {
        evaluation.mul_scalar_reduce(self.modulus.reduce(k), self.modulus)
    }

    fn add_signed_assign(&self, evaluation: &mut Self::Evaluation, values: &[i64]) {
        debug_assert_eq!(evaluation.coeff_count(), values.len());
        let lifted = Polynomial::new(values.iter().map(|&e| self.modulus.reduce(e)).collect());
        evaluation.add_reduce_assign(&lifted, self.modulus);
    }
}
