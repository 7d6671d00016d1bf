use num_traits::ConstZero;

use crate::reduce::*;
use crate::AlgebraError;

use super::Polynomial;

impl<T: Copy + ConstZero> Polynomial<T> {
    /// Performs coefficient-wise reduce addition of two [`Polynomial<T>`].
    ///
    /// Operands of different length are aligned at the constant term.
    pub fn add_reduce<M>(&self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceAdd<T, Output = T>,
    {
        let (long, short) = if self.coeff_count() >= rhs.coeff_count() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut data = long.data.clone();
        data.iter_mut()
            .zip(short.iter())
            .for_each(|(a, &b)| *a = modulus.reduce_add(*a, b));
        Self::new(data)
    }

    /// Performs an in-place coefficient-wise reduce addition.
    ///
    /// # Attention
    ///
    /// `rhs` must not be longer than `self`.
    #[inline]
    pub fn add_reduce_assign<M>(&mut self, rhs: &Self, modulus: M)
    where
        M: Copy + ReduceAddAssign<T>,
    {
        debug_assert!(self.coeff_count() >= rhs.coeff_count());
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(a, &b)| modulus.reduce_add_assign(a, b));
    }

    /// Performs coefficient-wise reduce subtraction `self - rhs`.
    pub fn sub_reduce<M>(&self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceSub<T, Output = T>,
    {
        let len = self.coeff_count().max(rhs.coeff_count());
        Self::new(
            (0..len)
                .map(|i| {
                    let a = self.data.get(i).copied().unwrap_or(T::ZERO);
                    let b = rhs.data.get(i).copied().unwrap_or(T::ZERO);
                    modulus.reduce_sub(a, b)
                })
                .collect(),
        )
    }

    /// Multiply `self` with a scalar.
    #[inline]
    pub fn mul_scalar_reduce<M>(&self, scalar: T, modulus: M) -> Self
    where
        M: Copy + ReduceMul<T, Output = T>,
    {
        Self::new(self.iter().map(|&v| modulus.reduce_mul(v, scalar)).collect())
    }

    /// Schoolbook product of two polynomials, without any quotient reduction.
    ///
    /// The result has `self.coeff_count() + rhs.coeff_count() - 1` coefficients.
    pub fn mul_reduce<M>(&self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceAdd<T, Output = T> + ReduceMul<T, Output = T>,
    {
        if self.data.is_empty() || rhs.data.is_empty() {
            return Self::new(Vec::new());
        }

        let mut destination = vec![T::ZERO; self.coeff_count() + rhs.coeff_count() - 1];
        for (i, &a) in self.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.iter().enumerate() {
                destination[i + j] = modulus.reduce_add(destination[i + j], modulus.reduce_mul(a, b));
            }
        }

        Self::new(destination)
    }

    /// Computes the remainder of `self` divided by `divisor`.
    ///
    /// The result always has exactly `deg(divisor)` coefficients.
    ///
    /// # Errors
    ///
    /// Fails if `divisor` is zero or its leading coefficient
    /// is not invertible modulo `modulus`.
    pub fn rem_reduce<M>(&self, divisor: &Self, modulus: M) -> Result<Self, AlgebraError>
    where
        M: Copy
            + ReduceSub<T, Output = T>
            + ReduceMul<T, Output = T>
            + TryReduceInv<T, Output = T>,
    {
        let degree = divisor.degree().ok_or(AlgebraError::ZeroDivisor)?;
        let leading_inv = modulus.try_reduce_inv(divisor[degree])?;

        let mut remainder = self.data.clone();
        for i in (degree..remainder.len()).rev() {
            let coeff = remainder[i];
            if coeff.is_zero() {
                continue;
            }
            let factor = modulus.reduce_mul(coeff, leading_inv);
            let shift = i - degree;
            remainder[shift..=i]
                .iter_mut()
                .zip(divisor.data[..=degree].iter())
                .for_each(|(r, &d)| *r = modulus.reduce_sub(*r, modulus.reduce_mul(factor, d)));
        }

        remainder.resize(degree, T::ZERO);
        Ok(Self::new(remainder))
    }

    /// Computes `self * rhs mod divisor`.
    #[inline]
    pub fn mul_rem_reduce<M>(
        &self,
        rhs: &Self,
        divisor: &Self,
        modulus: M,
    ) -> Result<Self, AlgebraError>
    where
        M: Copy
            + ReduceAdd<T, Output = T>
            + ReduceSub<T, Output = T>
            + ReduceMul<T, Output = T>
            + TryReduceInv<T, Output = T>,
    {
        self.mul_reduce(rhs, modulus).rem_reduce(divisor, modulus)
    }
}
