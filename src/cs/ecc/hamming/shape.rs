use super::table::ParityPositionTable;
use crate::error::{Error, Result};

/// Width and height of the parity-check matrix for a given data-bit count.
///
/// `width` is the codeword length and `height` the number of parity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordShape {
    pub width: usize,
    pub height: usize,
}

impl CodewordShape {
    /// Scans the table header from position 1 until `data_bits` data
    /// positions have been seen.
    pub fn derive(table: &ParityPositionTable, data_bits: usize) -> Result<Self> {
        if data_bits == 0 || table.is_empty() {
            return Err(Error::InvalidBitCount(data_bits as i64));
        }

        let mut width = 0;
        let mut height = 0;
        let mut seen = 0;
        while seen < data_bits {
            let position = width + 1;
            if position > table.max_position() {
                return Err(Error::invalid_input(format!(
                    "parity-position table covers {} positions, too few for {} data bits",
                    table.max_position(),
                    data_bits
                )));
            }
            if table.is_parity(position) {
                height += 1;
            } else {
                seen += 1;
            }
            width = position;
        }

        Ok(CodewordShape { width, height })
    }

    /// Shape for `data_bits`, building the table on the way.
    pub fn for_data_bits(data_bits: i64) -> Result<Self> {
        let table = ParityPositionTable::build(data_bits);
        if table.is_empty() {
            return Err(Error::InvalidBitCount(data_bits));
        }
        Self::derive(&table, data_bits as usize)
    }

    pub fn data_bits(&self) -> usize {
        self.width - self.height
    }
}
