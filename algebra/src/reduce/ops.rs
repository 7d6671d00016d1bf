use crate::AlgebraError;

/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular addition.
pub trait ReduceAdd<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a + b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add(self, a: T, b: B) -> Self::Output;
}

/// The modular addition assignment.
pub trait ReduceAddAssign<T, B = T> {
    /// Calculates `a += b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add_assign(self, a: &mut T, b: B);
}

/// The modular subtraction.
pub trait ReduceSub<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a - b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_sub(self, a: T, b: B) -> Self::Output;
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}

/// Try to calculate the inverse element when there may be not a field.
pub trait TryReduceInv<T> {
    /// Output type.
    type Output;

    /// Try to calculate the multiplicative inverse of `value modulo modulus` where `self` is modulus.
    ///
    /// # Errors
    ///
    /// If there dose not exist the such inverse, a [`AlgebraError`] will be returned.
    fn try_reduce_inv(self, value: T) -> Result<Self::Output, AlgebraError>;
}

/// The modular dot product.
pub trait ReduceDotProduct<T> {
    /// Output type.
    type Output;

    /// Calculate `∑a_i×b_i (mod modulus)` where `self` is modulus.
    fn reduce_dot_product(self, a: impl AsRef<[T]>, b: impl AsRef<[T]>) -> Self::Output;
}
