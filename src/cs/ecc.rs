//! Error correction code implementations.
//!
//! Currently implemented:
//! - Hamming single-error-correcting codes for any number of data bits
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::cs::ecc::{ErrorCorrection, HammingCode};
//!
//! let code = HammingCode::new(4).unwrap();
//! let codeword = code.encode(&[1, 0, 1, 1]).unwrap();
//! assert_eq!(codeword, vec![0, 1, 1, 0, 0, 1, 1]);
//! assert_eq!(code.decode(&codeword).unwrap(), vec![1, 0, 1, 1]);
//! ```

pub use crate::error::Result;

/// Trait for error correction code implementations.
///
/// Data and codewords are sequences of binary symbols, one `u8` (0 or 1) per
/// bit.
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Hamming single-error-correcting codes
pub mod hamming;
pub use hamming::{
    correct_error, decode, encode, random_message, simulate, syndrome, translate_syndrome,
    HammingCode,
};
