use algebra::Modulus;
use lattice::ScalarRing;
use serde::{Deserialize, Serialize};

use crate::{PkcError, Result};

use super::check_common;

/// Plain description of a scalar **LWE** scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweConstParameters {
    /// Length of the equations and of the secret, refers to **n**.
    pub dimension: usize,
    /// Cipher modulus, refers to **q**.
    pub modulus: u64,
    /// The maximum magnitude of the error of a public equation.
    pub max_error: u64,
    /// The number of public equations.
    pub list_size: usize,
}

/// Validated parameters of the scalar **LWE** scheme.
///
/// Invariant: `max_error <= ⌊q/8⌋`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LweConstParameters", into = "LweConstParameters")]
pub struct LweParameters {
    dimension: usize,
    modulus: Modulus,
    max_error: u64,
    list_size: usize,
}

impl LweParameters {
    /// Creates a new [`LweParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if `max_error > ⌊q/8⌋`,
    /// if `q < 4` or if `dimension` or `list_size` is zero.
    pub fn new(params: LweConstParameters) -> Result<Self> {
        let modulus = check_common(params.modulus, params.dimension, params.list_size)?;

        if params.max_error > modulus.eighth() {
            return Err(PkcError::ParameterError(format!(
                "max_error ({}) cannot exceed q//8 ({})",
                params.max_error,
                modulus.eighth()
            )));
        }

        Ok(Self {
            dimension: params.dimension,
            modulus,
            max_error: params.max_error,
            list_size: params.list_size,
        })
    }

    /// Returns the dimension **n**.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the modulus **q**.
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Returns the maximum error magnitude.
    #[inline]
    pub fn max_error(&self) -> u64 {
        self.max_error
    }

    /// Returns the number of public equations.
    #[inline]
    pub fn list_size(&self) -> usize {
        self.list_size
    }

    /// Returns the ring the scheme computes in.
    #[inline]
    pub fn ring(&self) -> ScalarRing {
        ScalarRing::new(self.modulus, self.dimension)
    }
}

impl TryFrom<LweConstParameters> for LweParameters {
    type Error = PkcError;

    #[inline]
    fn try_from(params: LweConstParameters) -> Result<Self> {
        Self::new(params)
    }
}

impl From<LweParameters> for LweConstParameters {
    #[inline]
    fn from(params: LweParameters) -> Self {
        Self {
            dimension: params.dimension,
            modulus: params.modulus.value(),
            max_error: params.max_error,
            list_size: params.list_size,
        }
    }
}
