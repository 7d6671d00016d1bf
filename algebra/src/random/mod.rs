//! Defines some algorithms for random values generation.

use rand::distributions::Uniform;
use rand::{CryptoRng, Rng};

use crate::Modulus;

/// Sample a vector whose values are uniform in `[0, q)`.
#[inline]
pub fn sample_uniform_values<R>(modulus: Modulus, length: usize, rng: &mut R) -> Vec<u64>
where
    R: Rng + CryptoRng,
{
    let distr = Uniform::new(0, modulus.value());
    (0..length).map(|_| rng.sample(distr)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn test_uniform_values_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let q = Modulus::new(13).unwrap();
        let values = sample_uniform_values(q, 1000, &mut rng);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| v < 13));
        // every residue shows up
        assert!((0..13).all(|r| values.contains(&r)));
    }
}
