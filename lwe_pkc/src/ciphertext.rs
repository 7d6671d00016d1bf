use algebra::Polynomial;
use lattice::{Lwe, RingArithmetic};

/// A ciphertext `(a', b')` over the ring `R`.
pub type Ciphertext<R> = Lwe<<R as RingArithmetic>::Element, <R as RingArithmetic>::Evaluation>;

/// A scalar **LWE** ciphertext carrying one bit.
pub type LweCiphertext = Lwe<Vec<u64>, u64>;

/// A ring **RLWE** ciphertext carrying `n` bits.
pub type RlweCiphertext = Lwe<Polynomial<u64>, Polynomial<u64>>;
