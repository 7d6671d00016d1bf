#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Probabilistic public-key encryption of bits from **LWE** and **RLWE**.
//!
//! A [`SecretKey`] publishes a list of noisy equations as a [`PublicKey`],
//! an [`Encryptor`] sums a random subset of them and adds the message,
//! and the same [`SecretKey`] removes the secret part and rounds.

mod ciphertext;
mod encryptor;
mod error;
mod noise_budget;
mod parameter;
mod public_key;
mod secret_key;

pub mod plaintext;

pub use ciphertext::{Ciphertext, LweCiphertext, RlweCiphertext};
pub use encryptor::{
    EncryptionMode, Encryptor, LweEncryptor, RlweEncryptor, WEAKENED_EQUATION_WEIGHTS,
};
pub use error::{PkcError, Result};
pub use noise_budget::NoiseBudget;
pub use parameter::*;
pub use plaintext::{ascii_to_bits, bits_to_ascii, Bit};
pub use public_key::{LwePublicKey, PublicKey, RlwePublicKey};
pub use secret_key::{LweSecretKey, RlweSecretKey, SecretKey};
