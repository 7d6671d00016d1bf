//! Defines the modulus `q` of the coefficient ring.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::AlgebraError;

mod ops;

/// A plain integer modulus `q`.
///
/// All reductions widen to `u128` before reducing, so any `q < 2^64` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modulus {
    value: u64,
}

impl Display for Modulus {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Modulus {
    /// Creates a new [`Modulus`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroModulus`] if `value` is zero.
    #[inline]
    pub fn new(value: u64) -> Result<Self, AlgebraError> {
        if value == 0 {
            return Err(AlgebraError::ZeroModulus);
        }
        Ok(Self { value })
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Returns `⌊q/2⌋`.
    #[inline]
    pub const fn half(&self) -> u64 {
        self.value >> 1
    }

    /// Returns `⌊q/4⌋`.
    #[inline]
    pub const fn quarter(&self) -> u64 {
        self.value >> 2
    }

    /// Returns `⌊q/8⌋`.
    #[inline]
    pub const fn eighth(&self) -> u64 {
        self.value >> 3
    }

    /// Returns `true` if `value` is in canonical form, i.e. `value < q`.
    #[inline]
    pub const fn is_canonical(&self, value: u64) -> bool {
        value < self.value
    }
}
