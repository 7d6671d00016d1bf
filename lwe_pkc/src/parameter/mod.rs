mod constants;
mod lwe;
mod rlwe;

pub use constants::*;
pub use lwe::{LweConstParameters, LweParameters};
pub use rlwe::{RlweConstParameters, RlweParameters};

use algebra::Modulus;

use crate::{PkcError, Result};

/// The smallest modulus for which `⌊q/4⌋ > 0`, needed by the decryption rounding.
pub const MIN_MODULUS: u64 = 4;

/// Checks the parts shared by both schemes and builds the modulus.
fn check_common(modulus: u64, dimension: usize, list_size: usize) -> Result<Modulus> {
    if modulus < MIN_MODULUS {
        return Err(PkcError::ParameterError(format!(
            "modulus ({modulus}) must be at least {MIN_MODULUS}"
        )));
    }
    if dimension == 0 {
        return Err(PkcError::ParameterError(
            "dimension must be positive".to_string(),
        ));
    }
    if list_size == 0 {
        return Err(PkcError::ParameterError(
            "public key must contain at least one equation".to_string(),
        ));
    }
    Ok(Modulus::new(modulus)?)
}
