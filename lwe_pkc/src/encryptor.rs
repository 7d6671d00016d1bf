use lattice::{utils::SignedMagnitudeSampler, PolynomialRing, RingArithmetic, ScalarRing};
use rand::{distributions::Distribution, CryptoRng, Rng};
use tracing::{trace, warn};

use crate::{
    plaintext::{check_bits, encode, Bit},
    Ciphertext, LweCiphertext, NoiseBudget, PkcError, PublicKey, Result, RlweCiphertext,
};

/// Number of equations combined per ciphertext in [`EncryptionMode::Weakened`].
pub const WEAKENED_EQUATION_WEIGHTS: usize = 2;

/// How many public equations an [`Encryptor<R>`] combines per ciphertext.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EncryptionMode {
    /// As many equations as the noise budget allows.
    #[default]
    Budgeted,
    /// Always [`WEAKENED_EQUATION_WEIGHTS`] equations, whatever the budget.
    ///
    /// Ciphertexts are easier to attack than in [`EncryptionMode::Budgeted`];
    /// only meant for small demonstration parameters.
    Weakened,
}

/// Encrypts messages with a [`PublicKey<R>`].
#[derive(Debug, Clone)]
pub struct Encryptor<R: RingArithmetic> {
    public_key: PublicKey<R>,
    mode: EncryptionMode,
}

/// Encryptor of the scalar **LWE** scheme.
pub type LweEncryptor = Encryptor<ScalarRing>;

/// Encryptor of the ring **RLWE** scheme.
pub type RlweEncryptor = Encryptor<PolynomialRing>;

impl<R: RingArithmetic> Encryptor<R> {
    /// Creates a new [`Encryptor<R>`] in [`EncryptionMode::Budgeted`].
    #[inline]
    pub fn new(public_key: PublicKey<R>) -> Self {
        Self::with_mode(public_key, EncryptionMode::Budgeted)
    }

    /// Creates a new [`Encryptor<R>`] with the given `mode`.
    pub fn with_mode(public_key: PublicKey<R>, mode: EncryptionMode) -> Self {
        if mode == EncryptionMode::Weakened {
            warn!(
                modulus = public_key.modulus(),
                max_error = public_key.max_error(),
                "encryptor combines only {WEAKENED_EQUATION_WEIGHTS} equations per ciphertext"
            );
        }
        Self { public_key, mode }
    }

    /// Returns the public key of this [`Encryptor<R>`].
    #[inline]
    pub fn public_key(&self) -> &PublicKey<R> {
        &self.public_key
    }

    /// Returns the mode of this [`Encryptor<R>`].
    #[inline]
    pub fn mode(&self) -> EncryptionMode {
        self.mode
    }

    /// Plans the noise of one ciphertext, returns the equation weights and the extra error bound.
    fn plan(&self) -> Result<(usize, u64)> {
        let modulus = self.public_key.modulus();
        let max_error = self.public_key.max_error();
        match self.mode {
            EncryptionMode::Budgeted => {
                let budget = NoiseBudget::plan(modulus, max_error)?;
                Ok((budget.max_equation_weights(), budget.max_extra_errors()))
            }
            EncryptionMode::Weakened => {
                let budget = NoiseBudget::new(modulus, max_error);
                Ok((WEAKENED_EQUATION_WEIGHTS, budget.max_extra_errors()))
            }
        }
    }

    /// Encrypts `message`, one bit per evaluation coordinate.
    ///
    /// `message` must already have the evaluation width and only hold bits.
    /// The planned extra error is only added when `extra_error` is set.
    fn encrypt_values<Rg>(
        &self,
        message: &[Bit],
        extra_error: bool,
        rng: &mut Rg,
    ) -> Result<Ciphertext<R>>
    where
        Rg: Rng + CryptoRng,
    {
        let (weights, max_extra_errors) = self.plan()?;
        let ring = self.public_key.ring();
        let equations = self.public_key.equations();
        trace!(weights, max_extra_errors, extra_error, "combining equations");

        let first = rng.gen_range(0..equations.len());
        let mut ciphertext = (1..weights).fold(equations[first].clone(), |acc, _| {
            let i = rng.gen_range(0..equations.len());
            acc.add_reduce_component_wise(&equations[i], ring)
        });

        let sampler = SignedMagnitudeSampler::below(max_extra_errors).filter(|_| extra_error);
        if let Some(sampler) = sampler {
            let errors: Vec<i64> = (0..ring.evaluation_width())
                .map(|_| sampler.sample(rng))
                .collect();
            ring.add_signed_assign(ciphertext.b_mut(), &errors);
        }

        let q = ring.modulus();
        let encoded = ring.evaluation_from_values(message.iter().map(|&m| encode(m, q)).collect());
        let b = ring.add_evaluations(ciphertext.b(), &encoded);
        *ciphertext.b_mut() = b;

        Ok(ciphertext)
    }
}

impl LweEncryptor {
    /// The scalar form only injects the planned extra error in [`EncryptionMode::Weakened`].
    #[inline]
    fn scalar_extra_error(&self) -> bool {
        self.mode == EncryptionMode::Weakened
    }

    /// Encrypts a single bit.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::InvalidBit`] if `bit > 1` and
    /// [`PkcError::ParameterError`] if the noise budget is too small.
    pub fn encrypt_bit<Rg>(&self, bit: Bit, rng: &mut Rg) -> Result<LweCiphertext>
    where
        Rg: Rng + CryptoRng,
    {
        check_bits(&[bit])?;
        self.encrypt_values(&[bit], self.scalar_extra_error(), rng)
    }

    /// Encrypts every bit of `message` into its own ciphertext.
    ///
    /// Nothing is returned unless every bit was encrypted.
    pub fn encrypt_message<Rg>(&self, message: &[Bit], rng: &mut Rg) -> Result<Vec<LweCiphertext>>
    where
        Rg: Rng + CryptoRng,
    {
        check_bits(message)?;
        message
            .iter()
            .map(|&bit| self.encrypt_values(&[bit], self.scalar_extra_error(), rng))
            .collect()
    }
}

impl RlweEncryptor {
    /// Encrypts `message` as one polynomial, bit `i` is the coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// Returns [`PkcError::LengthError`] if `message` does not hold exactly
    /// `n` bits, [`PkcError::InvalidBit`] if a value is not a bit and
    /// [`PkcError::ParameterError`] if the noise budget is too small.
    pub fn encrypt_message<Rg>(&self, message: &[Bit], rng: &mut Rg) -> Result<RlweCiphertext>
    where
        Rg: Rng + CryptoRng,
    {
        let n = self.public_key.ring().dimension();
        if message.len() != n {
            return Err(PkcError::LengthError {
                expected: n,
                actual: message.len(),
            });
        }
        check_bits(message)?;
        self.encrypt_values(message, true, rng)
    }
}
