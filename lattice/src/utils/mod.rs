//! Sampling helpers.

mod sample;

pub use sample::*;
