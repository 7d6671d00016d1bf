use algebra::reduce::ReduceDotProduct;
use algebra::{AlgebraError, Modulus};

use super::RingArithmetic;

/// The scalar ring `Z_q` used by plain LWE.
///
/// Elements are length-`n` vectors, evaluations are single integers
/// and `a∘s` is the dot product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarRing {
    modulus: Modulus,
    dimension: usize,
}

impl ScalarRing {
    /// Creates a new [`ScalarRing`].
    #[inline]
    pub fn new(modulus: Modulus, dimension: usize) -> Self {
        Self { modulus, dimension }
    }
}

impl RingArithmetic for ScalarRing {
    type Element = Vec<u64>;
    type Evaluation = u64;

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
        1
    }

    #[inline]
    fn element_from_values(&self, values: Vec<u64>) -> Self::Element {
        values
    }

    #[inline]
    fn element_values<'a>(&self, element: &'a Self::Element) -> &'a [u64] {
        element
    }

    #[inline]
    fn element_values_mut<'a>(&self, element: &'a mut Self::Element) -> &'a mut [u64] {
        element
    }

    #[inline]
    fn evaluation_from_values(&self, values: Vec<u64>) -> Self::Evaluation {
        debug_assert_eq!(values.len(), 1);
        values.first().copied().unwrap_or_default()
    }

    #[inline]
    fn evaluation_values<'a>(&self, evaluation: &'a Self::Evaluation) -> &'a [u64] {
        std::slice::from_ref(evaluation)
    }

    #[inline]
    fn evaluation_values_mut<'a>(&self, evaluation: &'a mut Self::Evaluation) -> &'a mut [u64] {
        std::slice::from_mut(evaluation)
    }

    #[inline]
    fn multiply(
        &self,
        a: &Self::Element,
        secret: &Self::Element,
    ) -> Result<Self::Evaluation, AlgebraError> {
        Ok(self.modulus.reduce_dot_product(a, secret))
    }
}
