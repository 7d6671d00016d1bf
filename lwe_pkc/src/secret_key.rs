use algebra::{AlgebraError, Polynomial};
use lattice::{utils::SignedMagnitudeSampler, Lwe, PolynomialRing, RingArithmetic, ScalarRing};
use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::{
    plaintext::{decode, Bit},
    LweCiphertext, LweParameters, PkcError, PublicKey, Result, RlweCiphertext, RlweParameters,
};

/// Whether the noisy equations have been computed yet.
#[derive(Debug, Clone)]
enum KeyState<R: RingArithmetic> {
    Unpublished,
    Published(PublicKey<R>),
}

/// Holds the secret, generates the public key and decrypts.
///
/// The uniform equations `A_i` are sampled on creation, the noisy
/// `T_i = A_i∘s + e_i` on the first call of [`SecretKey::get_public_keys`].
/// Later calls return the same [`PublicKey<R>`].
#[derive(Debug, Clone)]
pub struct SecretKey<R: RingArithmetic> {
    ring: R,
    max_error: u64,
    secret: R::Element,
    a_list: Vec<R::Element>,
    state: KeyState<R>,
}

/// Secret key of the scalar **LWE** scheme.
pub type LweSecretKey = SecretKey<ScalarRing>;

/// Secret key of the ring **RLWE** scheme.
pub type RlweSecretKey = SecretKey<PolynomialRing>;

impl<R: RingArithmetic> SecretKey<R> {
    fn generate<Rg>(
        ring: R,
        max_error: u64,
        list_size: usize,
        secret: Option<R::Element>,
        rng: &mut Rg,
    ) -> Result<Self>
    where
        Rg: Rng + CryptoRng,
    {
        let secret = match secret {
            Some(secret) => {
                if !ring.is_canonical_element(&secret) {
                    return Err(PkcError::ParameterError(format!(
                        "secret must have {} coordinates in [0, {})",
                        ring.dimension(),
                        ring.modulus()
                    )));
                }
                secret
            }
            None => ring.sample_element(rng),
        };

        let a_list: Vec<R::Element> = (0..list_size).map(|_| ring.sample_element(rng)).collect();

        debug!(
            modulus = ring.modulus().value(),
            dimension = ring.dimension(),
            max_error,
            list_size,
            "secret key generated"
        );

        Ok(Self {
            ring,
            max_error,
            secret,
            a_list,
            state: KeyState::Unpublished,
        })
    }

    /// Returns the ring of this [`SecretKey<R>`].
    #[inline]
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Returns the maximum error magnitude of the public equations.
    #[inline]
    pub fn max_error(&self) -> u64 {
        self.max_error
    }

    /// Returns the secret **s**.
    #[inline]
    pub fn secret(&self) -> &R::Element {
        &self.secret
    }

    /// Returns the uniform equations `A_i`.
    #[inline]
    pub fn a_list(&self) -> &[R::Element] {
        &self.a_list
    }

    /// Returns the public key if it has been computed.
    #[inline]
    pub fn published_key(&self) -> Option<&PublicKey<R>> {
        match &self.state {
            KeyState::Unpublished => None,
            KeyState::Published(public_key) => Some(public_key),
        }
    }

    /// Returns `true` if the public key has been computed.
    #[inline]
    pub fn is_published(&self) -> bool {
        matches!(self.state, KeyState::Published(_))
    }

    /// Returns the public key, computing `T_i = A_i∘s + e_i` on the first call.
    ///
    /// Every coordinate of `e_i` has a magnitude uniform in `[0, max_error]`
    /// and a uniform sign. Once computed, the same key is returned and
    /// `rng` is not used.
    pub fn get_public_keys<Rg>(&mut self, rng: &mut Rg) -> Result<PublicKey<R>>
    where
        Rg: Rng + CryptoRng,
    {
        if let KeyState::Published(public_key) = &self.state {
            return Ok(public_key.clone());
        }

        let sampler = SignedMagnitudeSampler::new(self.max_error);
        let equations = self
            .a_list
            .iter()
            .map(|a| Lwe::generate_noisy_sample(&self.ring, a.clone(), &self.secret, sampler, rng))
            .collect::<std::result::Result<Vec<_>, AlgebraError>>()?;

        let public_key = PublicKey::new_unchecked(self.ring.clone(), self.max_error, equations);
        debug!(
            list_size = public_key.list_size(),
            max_error = self.max_error,
            "public key published"
        );

        self.state = KeyState::Published(public_key.clone());
        Ok(public_key)
    }

    /// Decrypts `(a', b')` coordinate-wise.
    fn decrypt_values(&self, a: &R::Element, b: &R::Evaluation) -> Result<Vec<Bit>> {
        let ring = &self.ring;

        let actual = ring.element_values(a).len();
        if actual != ring.dimension() {
            return Err(PkcError::LengthError {
                expected: ring.dimension(),
                actual,
            });
        }
        let actual = ring.evaluation_values(b).len();
        if actual != ring.evaluation_width() {
            return Err(PkcError::LengthError {
                expected: ring.evaluation_width(),
                actual,
            });
        }

        let a = ring.canonicalize_element(a.clone());
        let b = ring.canonicalize_evaluation(b.clone());

        let ideal = ring.multiply(&a, &self.secret)?;
        let diff = ring.sub_evaluations(&b, &ideal);

        let q = ring.modulus();
        Ok(ring
            .evaluation_values(&diff)
            .iter()
            .map(|&d| decode(d, q))
            .collect())
    }
}

impl LweSecretKey {
    /// Creates a new [`LweSecretKey`].
    ///
    /// A uniform secret is sampled when `secret` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if the supplied secret
    /// does not have `n` coordinates in `[0, q)`.
    pub fn new<Rg>(params: &LweParameters, secret: Option<Vec<u64>>, rng: &mut Rg) -> Result<Self>
    where
        Rg: Rng + CryptoRng,
    {
        Self::generate(
            params.ring(),
            params.max_error(),
            params.list_size(),
            secret,
            rng,
        )
    }

    /// Decrypts a single bit.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::LengthError`] if `a'` does not have `n` coordinates.
    pub fn decrypt_bit(&self, ciphertext: &LweCiphertext) -> Result<Bit> {
        let bits = self.decrypt_values(ciphertext.a(), ciphertext.b())?;
        Ok(bits[0])
    }

    /// Decrypts one bit per ciphertext.
    pub fn decrypt_message(&self, ciphertexts: &[LweCiphertext]) -> Result<Vec<Bit>> {
        ciphertexts.iter().map(|c| self.decrypt_bit(c)).collect()
    }
}

impl RlweSecretKey {
    /// Creates a new [`RlweSecretKey`].
    ///
    /// A uniform secret is sampled when `secret` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::ParameterError`] if the supplied secret
    /// does not have `n` coefficients in `[0, q)`.
    pub fn new<Rg>(
        params: &RlweParameters,
        secret: Option<Polynomial<u64>>,
        rng: &mut Rg,
    ) -> Result<Self>
    where
        Rg: Rng + CryptoRng,
    {
        Self::generate(
            params.ring().clone(),
            params.max_error(),
            params.list_size(),
            secret,
            rng,
        )
    }

    /// Decrypts the `n` bits of `ciphertext`, bit `i` is the coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::LengthError`] if `a'` or `b'` does not have `n` coefficients.
    pub fn decrypt_message(&self, ciphertext: &RlweCiphertext) -> Result<Vec<Bit>> {
        self.decrypt_values(ciphertext.a(), ciphertext.b())
    }
}
