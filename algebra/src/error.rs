//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when a modulus of zero is requested.
    #[error("The modulus should be greater than zero")]
    ZeroModulus,
    /// Error that occurs when a quotient ring is built from a constant polynomial.
    #[error("The quotient polynomial should have a positive degree")]
    ConstantQuotient,
    /// Error that occurs when dividing by the zero polynomial.
    #[error("Division by the zero polynomial")]
    ZeroDivisor,
}
