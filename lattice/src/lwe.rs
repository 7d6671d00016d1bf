use rand::{distributions::Distribution, CryptoRng, Rng};

use algebra::AlgebraError;

use crate::{utils::SignedMagnitudeSampler, RingArithmetic};

/// A pair `(a, b)` with `b ≈ a∘s`.
///
/// The same shape is used for the public equations, where `b = a∘s + e`,
/// and for ciphertexts, where `b` additionally carries the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lwe<A, B> {
    /// The equation part.
    a: A,
    /// The evaluation part.
    b: B,
}

impl<A, B> Lwe<A, B> {
    /// Creates a new [`Lwe<A, B>`].
    #[inline]
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Returns a reference to the `a` of this [`Lwe<A, B>`].
    #[inline]
    pub fn a(&self) -> &A {
        &self.a
    }

    /// Returns a reference to the `b` of this [`Lwe<A, B>`].
    #[inline]
    pub fn b(&self) -> &B {
        &self.b
    }

    /// Returns a mutable reference to the `b` of this [`Lwe<A, B>`].
    #[inline]
    pub fn b_mut(&mut self) -> &mut B {
        &mut self.b
    }

    /// Drop self, and return `(a, b)`.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }

    /// Perform component-wise reduce addition of two [`Lwe<A, B>`].
    #[inline]
    pub fn add_reduce_component_wise<R>(&self, rhs: &Self, ring: &R) -> Self
    where
        R: RingArithmetic<Element = A, Evaluation = B>,
    {
        Self::new(
            ring.add_elements(&self.a, &rhs.a),
            ring.add_evaluations(&self.b, &rhs.b),
        )
    }

    /// Generates `(a, a∘s + e)` where every coordinate of `e` is drawn from `error_sampler`.
    pub fn generate_noisy_sample<R, Rg>(
        ring: &R,
        a: A,
        secret: &A,
        error_sampler: SignedMagnitudeSampler,
        rng: &mut Rg,
    ) -> Result<Self, AlgebraError>
    where
        R: RingArithmetic<Element = A, Evaluation = B>,
        Rg: Rng + CryptoRng,
    {
        let mut b = ring.multiply(&a, secret)?;
        let errors: Vec<i64> = (0..ring.evaluation_width())
            .map(|_| error_sampler.sample(rng))
            .collect();
        ring.add_signed_assign(&mut b, &errors);

        Ok(Self::new(a, b))
    }
}
