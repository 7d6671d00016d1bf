use std::sync::Arc;

use algebra::Polynomial;
use lattice::{Lwe, PolynomialRing, RingArithmetic, ScalarRing};

use crate::{
    Ciphertext, LweConstParameters, LweParameters, PkcError, Result, RlweConstParameters,
    RlweParameters,
};

/// The published list of noisy equations `(A_i, T_i = A_i∘s + e_i)`.
///
/// Immutable once built; clones share the same equations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey<R: RingArithmetic> {
    ring: R,
    max_error: u64,
    equations: Arc<[Ciphertext<R>]>,
}

/// Public key of the scalar **LWE** scheme.
pub type LwePublicKey = PublicKey<ScalarRing>;

/// Public key of the ring **RLWE** scheme.
pub type RlwePublicKey = PublicKey<PolynomialRing>;

impl<R: RingArithmetic> PublicKey<R> {
    /// Wraps equations produced by a key generator.
    #[inline]
    pub(crate) fn new_unchecked(ring: R, max_error: u64, equations: Vec<Ciphertext<R>>) -> Self {
        Self {
            ring,
            max_error,
            equations: equations.into(),
        }
    }

    /// Creates a [`PublicKey<R>`] from equations received from elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if the list is empty, and
    /// [`PkcError::LengthError`] or [`PkcError::ParameterError`] if an
    /// equation does not have the shape of `ring` or is not reduced.
    pub fn from_equations(ring: R, max_error: u64, equations: Vec<Ciphertext<R>>) -> Result<Self> {
        if equations.is_empty() {
            return Err(PkcError::ParameterError(
                "public key must contain at least one equation".to_string(),
            ));
        }

        let q = ring.modulus();
        for equation in &equations {
            check_len(ring.dimension(), ring.element_values(equation.a()).len())?;
            check_len(
                ring.evaluation_width(),
                ring.evaluation_values(equation.b()).len(),
            )?;

            let canonical = ring
                .element_values(equation.a())
                .iter()
                .chain(ring.evaluation_values(equation.b()))
                .all(|&v| q.is_canonical(v));
            if !canonical {
                return Err(PkcError::ParameterError(format!(
                    "public equation is not reduced modulo {q}"
                )));
            }
        }

        Ok(Self::new_unchecked(ring, max_error, equations))
    }

    /// Returns the ring of this [`PublicKey<R>`].
    #[inline]
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Returns the modulus **q**.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.ring.modulus().value()
    }

    /// Returns the maximum error magnitude of the equations.
    #[inline]
    pub fn max_error(&self) -> u64 {
        self.max_error
    }

    /// Returns the equations `(A_i, T_i)`.
    #[inline]
    pub fn equations(&self) -> &[Ciphertext<R>] {
        &self.equations
    }

    /// Returns the number of equations.
    #[inline]
    pub fn list_size(&self) -> usize {
        self.equations.len()
    }

    /// Returns an iterator over the `A_i`.
    #[inline]
    pub fn a_list(&self) -> impl Iterator<Item = &R::Element> {
        self.equations.iter().map(|e| e.a())
    }

    /// Returns an iterator over the `T_i`.
    #[inline]
    pub fn t_list(&self) -> impl Iterator<Item = &R::Evaluation> {
        self.equations.iter().map(|e| e.b())
    }
}

#[inline]
fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PkcError::LengthError { expected, actual });
    }
    Ok(())
}

fn zip_lists<A, B>(a_list: Vec<A>, t_list: Vec<B>) -> Result<Vec<Lwe<A, B>>> {
    check_len(a_list.len(), t_list.len())?;
    Ok(a_list
        .into_iter()
        .zip(t_list)
        .map(|(a, t)| Lwe::new(a, t))
        .collect())
}

impl LwePublicKey {
    /// Rebuilds a scalar public key from `(A-list, T-list, q, max_error)`.
    ///
    /// # Errors
    ///
    /// Fails if the lists disagree in length or shape, or if
    /// `q` and `max_error` are not valid [`LweParameters`].
    pub fn from_lists(
        a_list: Vec<Vec<u64>>,
        t_list: Vec<u64>,
        modulus: u64,
        max_error: u64,
    ) -> Result<Self> {
        let params = LweParameters::new(LweConstParameters {
            dimension: a_list.first().map_or(0, Vec::len),
            modulus,
            max_error,
            list_size: a_list.len(),
        })?;
        Self::from_equations(params.ring(), max_error, zip_lists(a_list, t_list)?)
    }
}

impl RlwePublicKey {
    /// Rebuilds a ring public key from `(A-list, T-list, φ, q, max_error)`.
    ///
    /// # Errors
    ///
    /// Fails if the lists disagree in length or shape, or if
    /// `φ`, `q` and `max_error` are not valid [`RlweParameters`].
    pub fn from_lists(
        a_list: Vec<Polynomial<u64>>,
        t_list: Vec<Polynomial<u64>>,
        quotient: Polynomial<u64>,
        modulus: u64,
        max_error: u64,
    ) -> Result<Self> {
        let params = RlweParameters::new(RlweConstParameters {
            message_length: quotient.degree().unwrap_or(0),
            modulus,
            max_error,
            list_size: a_list.len(),
            quotient: Some(quotient.inner_data()),
        })?;
        Self::from_equations(
            params.ring().clone(),
            max_error,
            zip_lists(a_list, t_list)?,
        )
    }

    /// Returns the quotient polynomial `φ(x)`.
    #[inline]
    pub fn quotient(&self) -> &Polynomial<u64> {
        self.ring.quotient()
    }
}
