#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Defines the lattice structures shared by the scalar and the ring
//! public-key schemes.

mod lwe;
mod ring;

pub mod utils;

pub use lwe::Lwe;
pub use ring::{PolynomialRing, RingArithmetic, ScalarRing};
