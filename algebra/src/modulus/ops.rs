use crate::reduce::*;
use crate::AlgebraError;

use super::Modulus;

impl Reduce<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u64) -> Self::Output {
        value % self.value
    }
}

impl Reduce<u128> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u128) -> Self::Output {
        (value % self.value as u128) as u64
    }
}

/// Lifts a signed value, e.g. a centered error, into `[0, q)`.
impl Reduce<i64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: i64) -> Self::Output {
        (value as i128).rem_euclid(self.value as i128) as u64
    }
}

impl ReduceAdd<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_add(self, a: u64, b: u64) -> Self::Output {
        self.reduce(a as u128 + b as u128)
    }
}

impl ReduceAddAssign<u64> for Modulus {
    #[inline]
    fn reduce_add_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_add(*a, b);
    }
}

impl ReduceSub<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_sub(self, a: u64, b: u64) -> Self::Output {
        if a >= b {
            a - b
        } else {
            self.value - b + a
        }
    }
}

impl ReduceMul<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_mul(self, a: u64, b: u64) -> Self::Output {
        self.reduce(a as u128 * b as u128)
    }
}

impl TryReduceInv<u64> for Modulus {
    type Output = u64;

    /// Extended euclidean algorithm, works for composite moduli
    /// as long as `gcd(value, q) == 1`.
    fn try_reduce_inv(self, value: u64) -> Result<Self::Output, AlgebraError> {
        let modulus = self.value as i128;
        let (mut r0, mut r1) = (modulus, (value % self.value) as i128);
        let (mut t0, mut t1) = (0i128, 1i128);

        while r1 != 0 {
            let quotient = r0 / r1;
            (r0, r1) = (r1, r0 - quotient * r1);
            (t0, t1) = (t1, t0 - quotient * t1);
        }

        if r0 != 1 {
            return Err(AlgebraError::NoInverse {
                value,
                modulus: self.value,
            });
        }

        Ok(t0.rem_euclid(modulus) as u64)
    }
}

impl ReduceDotProduct<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_dot_product(self, a: impl AsRef<[u64]>, b: impl AsRef<[u64]>) -> Self::Output {
        let a = a.as_ref();
        let b = b.as_ref();
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(0u64, |acc, (&x, &y)| self.reduce_add(acc, self.reduce_mul(x, y)))
    }
}
