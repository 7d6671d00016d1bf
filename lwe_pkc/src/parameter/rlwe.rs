use algebra::{Modulus, Polynomial};
use lattice::{PolynomialRing, RingArithmetic};
use serde::{Deserialize, Serialize};

use crate::{PkcError, Result};

use super::check_common;

/// Plain description of a ring **RLWE** scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RlweConstParameters {
    /// Number of message bits per ciphertext, also the ring dimension **n**.
    pub message_length: usize,
    /// Cipher modulus, refers to **q**.
    pub modulus: u64,
    /// The maximum magnitude of the error of a public equation.
    pub max_error: u64,
    /// The number of public equations.
    pub list_size: usize,
    /// Coefficients of `φ(x)`, constant term first. `None` means `x^n + 1`.
    pub quotient: Option<Vec<u64>>,
}

/// Validated parameters of the ring **RLWE** scheme.
///
/// Invariant: `max_error < ⌊q/4⌋` and `deg φ = n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RlweConstParameters", into = "RlweConstParameters")]
pub struct RlweParameters {
    ring: PolynomialRing,
    max_error: u64,
    list_size: usize,
}

impl RlweParameters {
    /// Creates a new [`RlweParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if `max_error >= ⌊q/4⌋`,
    /// if `q < 4`, if `message_length` or `list_size` is zero,
    /// or if the quotient is not a degree-`n` polynomial with
    /// coefficients in `[0, q)` and an invertible leading coefficient.
    pub fn new(params: RlweConstParameters) -> Result<Self> {
        let modulus = check_common(params.modulus, params.message_length, params.list_size)?;

        if params.max_error >= modulus.quarter() {
            return Err(PkcError::ParameterError(format!(
                "max_error ({}) must be below q//4 ({})",
                params.max_error,
                modulus.quarter()
            )));
        }

        let n = params.message_length;
        let quotient = match params.quotient {
            Some(coeffs) => Polynomial::new(coeffs),
            None => Polynomial::negacyclic_quotient(n),
        };
        let ring = build_ring(modulus, quotient, n)?;

        Ok(Self {
            ring,
            max_error: params.max_error,
            list_size: params.list_size,
        })
    }

    /// Returns the message length, which is also the ring dimension **n**.
    #[inline]
    pub fn message_length(&self) -> usize {
        self.ring.dimension()
    }

    /// Returns the modulus **q**.
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.ring.modulus()
    }

    /// Returns the quotient polynomial `φ(x)`.
    #[inline]
    pub fn quotient(&self) -> &Polynomial<u64> {
        self.ring.quotient()
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
    pub fn ring(&self) -> &PolynomialRing {
        &self.ring
    }
}

/// Builds `Z_q[x]/(φ)` and checks `deg φ = n`.
fn build_ring(modulus: Modulus, quotient: Polynomial<u64>, n: usize) -> Result<PolynomialRing> {
    if let Some(&c) = quotient.iter().find(|&&c| !modulus.is_canonical(c)) {
        return Err(PkcError::ParameterError(format!(
            "quotient coefficient {c} is not reduced modulo {modulus}"
        )));
    }
    if quotient.degree() != Some(n) {
        return Err(PkcError::ParameterError(format!(
            "quotient polynomial {quotient} must have degree {n}"
        )));
    }
    PolynomialRing::new(modulus, quotient)
        .map_err(|e| PkcError::ParameterError(format!("invalid quotient polynomial: {e}")))
}

impl TryFrom<RlweConstParameters> for RlweParameters {
    type Error = PkcError;

    #[inline]
    fn try_from(params: RlweConstParameters) -> Result<Self> {
        Self::new(params)
    }
}

impl From<RlweParameters> for RlweConstParameters {
    fn from(params: RlweParameters) -> Self {
        let negacyclic = Polynomial::negacyclic_quotient(params.message_length());
        let quotient = if *params.quotient() == negacyclic {
            None
        } else {
            Some(params.quotient().data().to_vec())
        };
        Self {
            message_length: params.message_length(),
            modulus: params.modulus().value(),
            max_error: params.max_error,
            list_size: params.list_size,
            quotient,
        }
    }
}
