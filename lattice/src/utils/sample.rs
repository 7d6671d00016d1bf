use rand::{distributions::Distribution, Rng};

/// The signed magnitude sampler.
///
/// A magnitude is drawn uniformly from `[0, max_magnitude]` and a sign
/// uniformly from `{-1, +1}`, so the support is `[-max_magnitude, max_magnitude]`.
///
/// prob\[0] = 2 * prob\[k] for every `k != 0`, since both signs of `0` coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedMagnitudeSampler {
    max_magnitude: u64,
}

impl SignedMagnitudeSampler {
    /// Creates a new [`SignedMagnitudeSampler`] with inclusive bound `max_magnitude`.
    #[inline]
    pub fn new(max_magnitude: u64) -> Self {
        debug_assert!(max_magnitude <= i64::MAX as u64);
        Self { max_magnitude }
    }

    /// Creates a sampler whose magnitude is uniform in `[0, bound)`.
    ///
    /// Returns `None` if `bound` is zero.
    #[inline]
    pub fn below(bound: u64) -> Option<Self> {
        bound.checked_sub(1).map(Self::new)
    }

    /// Returns the inclusive bound of the magnitude.
    #[inline]
    pub fn max_magnitude(&self) -> u64 {
        self.max_magnitude
    }
}

impl Distribution<i64> for SignedMagnitudeSampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let magnitude = rng.gen_range(0..=self.max_magnitude) as i64;
        if rng.next_u32() & 0b1 == 1 {
            magnitude
        } else {
            -magnitude
        }
    }
}
