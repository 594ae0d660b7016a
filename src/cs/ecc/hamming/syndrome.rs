//! Syndrome computation, translation and single-bit correction.

use super::codec::HammingCode;
use crate::error::{Error, Result};
use log::debug;

/// Computes the syndrome `H * received` over GF(2).
///
/// The code is rebuilt from the length of `received`.
///
/// # Errors
///
/// `InvalidLength` when `received.len()` is not a codeword length.
pub fn syndrome(received: &[u8]) -> Result<Vec<u8>> {
    HammingCode::for_length(received.len())?.syndrome(received)
}

/// Reads the syndrome as a little-endian binary number.
///
/// Zero means no error was detected; anything else is the 1-based position
/// of the bit presumed faulty.
pub fn translate_syndrome(syndrome: &[u8]) -> usize {
    syndrome
        .iter()
        .enumerate()
        .map(|(i, &bit)| (bit as usize) << i)
        .sum()
}

/// Flips the bit at 1-based `position` in place. Position 0 leaves the vector
/// untouched.
///
/// # Errors
///
/// `InvalidLength` when `position` lies past the end of `vector`.
pub fn correct_error(vector: &mut [u8], position: usize) -> Result<()> {
    if position == 0 {
        return Ok(());
    }
    let len = vector.len();
    let bit = vector
        .get_mut(position - 1)
        .ok_or(Error::InvalidLength(len))?;
    *bit ^= 1;
    debug!("corrected bit at position {}", position);
    Ok(())
}

/// Like [`correct_error`] but returns a corrected copy.
pub fn corrected(vector: &[u8], position: usize) -> Result<Vec<u8>> {
    let mut out = vector.to_vec();
    correct_error(&mut out, position)?;
    Ok(out)
}
