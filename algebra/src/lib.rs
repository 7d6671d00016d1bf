#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Define arithmetic operations over `Z_q` and `Z_q[x]`.

pub mod modulus;
pub mod polynomial;
pub mod random;
pub mod reduce;

mod error;

pub use error::AlgebraError;
pub use modulus::Modulus;
pub use polynomial::Polynomial;
