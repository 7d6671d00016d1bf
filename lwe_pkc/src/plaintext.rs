//! Message encoding.
//!
//! A bit `m` is carried as `m * ⌊q/2⌋` and read back by rounding, see
//! [`encode`] and [`decode`]. Text is turned into bits by [`ascii_to_bits`]
//! and back by [`bits_to_ascii`].

use algebra::Modulus;

use crate::{PkcError, Result};

/// A message bit, `0` or `1`.
pub type Bit = u8;

/// Number of bits per character.
const CHAR_BITS: usize = 8;

/// Checks that every value of `message` is a bit.
#[inline]
pub fn check_bits(message: &[Bit]) -> Result<()> {
    match message.iter().find(|&&m| m > 1) {
        Some(&m) => Err(PkcError::InvalidBit(m as u64)),
        None => Ok(()),
    }
}

/// Encodes a bit as `bit * ⌊q/2⌋`.
#[inline]
pub fn encode(bit: Bit, modulus: Modulus) -> u64 {
    bit as u64 * modulus.half()
}

/// Decodes `diff = b - a∘s` by `⌊((diff + ⌊q/4⌋) mod q) / ⌊q/2⌋⌋`.
///
/// Values near `0` give `0` and values near `q/2` give `1`. For odd `q`
/// the quotient is `2` when `diff + ⌊q/4⌋ ≡ q - 1`, which lies just below
/// `q`, i.e. near `0`, so it is read as `0`.
#[inline]
pub fn decode(diff: u64, modulus: Modulus) -> Bit {
    let q = modulus.value() as u128;
    let shifted = (diff as u128 + modulus.quarter() as u128) % q;
    ((shifted / modulus.half() as u128) % 2) as Bit
}

/// Converts ASCII text into bits, eight per character, most significant first.
///
/// # Errors
///
/// Returns [`PkcError::NonAsciiCharacter`] on the first non-ASCII character.
pub fn ascii_to_bits(text: &str) -> Result<Vec<Bit>> {
    let mut bits = Vec::with_capacity(text.len() * CHAR_BITS);
    for c in text.chars() {
        if !c.is_ascii() {
            return Err(PkcError::NonAsciiCharacter(c));
        }
        let byte = c as u8;
        bits.extend((0..CHAR_BITS).rev().map(|i| (byte >> i) & 1));
    }
    Ok(bits)
}

/// Converts bits back into text, reading them in groups of eight.
///
/// A shorter trailing group is read as the binary number it spells.
///
/// # Errors
///
/// Returns [`PkcError::InvalidBit`] if a value is not a bit, and
/// [`PkcError::NonAsciiCharacter`] if a group spells a value above `0x7f`.
pub fn bits_to_ascii(bits: &[Bit]) -> Result<String> {
    check_bits(bits)?;
    bits.chunks(CHAR_BITS)
        .map(|chunk| {
            let c = chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b) as char;
            if c.is_ascii() {
                Ok(c)
            } else {
                Err(PkcError::NonAsciiCharacter(c))
            }
        })
        .collect()
}
