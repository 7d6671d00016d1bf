use algebra::AlgebraError;

/// Errors that may occur.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PkcError {
    /// Error that occurs when the scheme parameters are not usable,
    /// e.g. `max_error` is too large for `q` or the noise budget
    /// does not allow combining two public equations.
    #[error("Invalid parameter: {0}")]
    ParameterError(String),
    /// Error that occurs when a message or a ciphertext
    /// does not have the length the scheme is configured for.
    #[error("Message length must be {expected}, but got {actual}!")]
    LengthError {
        /// The configured length.
        expected: usize,
        /// The supplied length.
        actual: usize,
    },
    /// Error that occurs when a message coordinate is neither `0` nor `1`.
    #[error("Message value {0} is not a bit!")]
    InvalidBit(u64),
    /// Error that occurs when text handed to the bit codec is not ASCII.
    #[error("Character {0:?} is not ASCII!")]
    NonAsciiCharacter(char),
    /// Error raised by the underlying ring arithmetic.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// A specialized result type for this crate.
pub type Result<T> = std::result::Result<T, PkcError>;
