use super::{LweConstParameters, RlweConstParameters};

/// Small scalar parameters: `q = 17`, `n = 5`, `max_error = 1`.
///
/// The noise budget allows exactly two equations per ciphertext.
pub const LWE_DEMO_PARAMETERS: LweConstParameters = LweConstParameters {
    dimension: 5,
    modulus: 17,
    max_error: 1,
    list_size: 5,
};

/// Scalar parameters used with the weakened encryption mode:
/// `q = 109`, `n = 5`, `max_error = 4`, twelve public equations.
pub const LWE_WEAKENED_DEMO_PARAMETERS: LweConstParameters = LweConstParameters {
    dimension: 5,
    modulus: 109,
    max_error: 4,
    list_size: 12,
};

/// Small ring parameters over `Z_105[x]/(x^4 + 1)`, `max_error = 4`.
pub const RLWE_DEMO_PARAMETERS: RlweConstParameters = RlweConstParameters {
    message_length: 4,
    modulus: 105,
    max_error: 4,
    list_size: 2,
    quotient: None,
};
