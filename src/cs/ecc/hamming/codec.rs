use super::matrices::{
    data_bits_for_length, generator_from_table, parity_check_from_table, recovery_from_table,
};
use super::shape::CodewordShape;
use super::syndrome::{corrected, translate_syndrome};
use super::table::ParityPositionTable;
use crate::cs::ecc::ErrorCorrection;
use crate::error::{Error, Result};
use crate::math::gf2::{check_binary, BinaryMatrix};
use log::debug;

/// A Hamming single-error-correcting code for a fixed number of data bits.
///
/// Holds the generator, parity-check and recovery matrices, all derived from
/// the parity-position table for `data_bits`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCode {
    shape: CodewordShape,
    generator: BinaryMatrix,
    parity_check: BinaryMatrix,
    recovery: BinaryMatrix,
}

impl HammingCode {
    /// Creates the code for `data_bits` data bits.
    ///
    /// # Errors
    ///
    /// `InvalidBitCount` when `data_bits <= 0`.
    pub fn new(data_bits: i64) -> Result<Self> {
        let table = ParityPositionTable::build(data_bits);
        if table.is_empty() {
            return Err(Error::InvalidBitCount(data_bits));
        }
        let shape = CodewordShape::derive(&table, data_bits as usize)?;

        debug!(
            "hamming code: {} data bits, {} parity bits, codeword length {}",
            shape.data_bits(),
            shape.height,
            shape.width
        );

        Ok(HammingCode {
            shape,
            generator: generator_from_table(&table, shape),
            parity_check: parity_check_from_table(&table, shape),
            recovery: recovery_from_table(&table, shape),
        })
    }

    /// Creates the code whose codewords are `len` bits long.
    ///
    /// # Errors
    ///
    /// `InvalidLength` when no positive data-bit count gives that length.
    pub fn for_length(len: usize) -> Result<Self> {
        let data_bits = data_bits_for_length(len)?;
        Self::new(data_bits as i64)
    }

    pub fn data_bits(&self) -> usize {
        self.shape.data_bits()
    }

    pub fn parity_bits(&self) -> usize {
        self.shape.height
    }

    pub fn codeword_len(&self) -> usize {
        self.shape.width
    }

    pub fn shape(&self) -> CodewordShape {
        self.shape
    }

    /// Generator matrix G.
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }

    /// Parity-check matrix H.
    pub fn parity_check(&self) -> &BinaryMatrix {
        &self.parity_check
    }

    /// Recovery matrix R.
    pub fn recovery(&self) -> &BinaryMatrix {
        &self.recovery
    }

    /// Encodes `message` as `G * message` over GF(2).
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        if message.len() != self.data_bits() {
            return Err(Error::DimensionMismatch {
                expected: self.data_bits(),
                actual: message.len(),
            });
        }
        self.generator.mul_vec(message)
    }

    /// Computes `H * received` over GF(2).
    ///
    /// The result read as a little-endian number is the 1-based position of
    /// a single flipped bit, or zero for a valid codeword.
    pub fn syndrome(&self, received: &[u8]) -> Result<Vec<u8>> {
        self.check_length(received)?;
        self.parity_check.mul_vec(received)
    }

    /// Selects the data bits of `codeword` with `R * codeword`.
    ///
    /// No correction is applied.
    pub fn extract_message(&self, codeword: &[u8]) -> Result<Vec<u8>> {
        self.check_length(codeword)?;
        check_binary(codeword)?;

        // Each row of R has exactly one 1, so the product is a selection.
        Ok((0..self.recovery.nrows())
            .filter_map(|i| self.recovery.ones_in_row(i).next())
            .map(|j| codeword[j])
            .collect())
    }

    /// Corrects at most one flipped bit in `received`.
    ///
    /// Returns the corrected codeword and the 1-based position that was
    /// flipped, or 0 if the syndrome was zero.
    pub fn correct(&self, received: &[u8]) -> Result<(Vec<u8>, usize)> {
        let syndrome = self.syndrome(received)?;
        let position = translate_syndrome(&syndrome);
        Ok((corrected(received, position)?, position))
    }

    fn check_length(&self, v: &[u8]) -> Result<()> {
        if v.len() != self.codeword_len() {
            return Err(Error::DimensionMismatch {
                expected: self.codeword_len(),
                actual: v.len(),
            });
        }
        Ok(())
    }
}

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        HammingCode::encode(self, data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let (codeword, _) = self.correct(data)?;
        self.extract_message(&codeword)
    }
}

/// Encodes `message`, building the code for its length.
///
/// # Errors
///
/// `InvalidBitCount` for an empty message, `InvalidInput` for symbols other
/// than 0 and 1.
pub fn encode(message: &[u8]) -> Result<Vec<u8>> {
    HammingCode::new(message.len() as i64)?.encode(message)
}

/// Extracts the message bits from a corrected `codeword`.
///
/// # Errors
///
/// `InvalidLength` when the length is not a codeword length.
pub fn decode(codeword: &[u8]) -> Result<Vec<u8>> {
    HammingCode::for_length(codeword.len())?.extract_message(codeword)
}
