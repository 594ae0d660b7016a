//! The parity-position table every other Hamming matrix is cut from.
//!
//! Columns are indexed by 1-based codeword position; column 0 stands for
//! position 0 and is all zeros. The header row marks parity positions (powers
//! of two). Data row `i` (1-based) holds bit `i - 1` of each position, so
//! reading a column top to bottom below the header spells its position in
//! little-endian binary.
//!
//! For n = 4 the table is:
//!
//! ```text
//! position  0 1 2 3 4 5 6 7
//! header    0 1 1 0 1 0 0 0
//! bit 0     0 1 0 1 0 1 0 1
//! bit 1     0 0 1 1 0 0 1 1
//! bit 2     0 0 0 0 1 1 1 1
//! ```

use crate::math::gf2::BinaryMatrix;

/// Binary table classifying codeword positions and spelling their indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityPositionTable {
    matrix: BinaryMatrix,
}

impl ParityPositionTable {
    /// Builds the table for `data_bits` data bits.
    ///
    /// A non-positive count describes no code and yields an empty table;
    /// callers must treat that as an invalid bit count.
    pub fn build(data_bits: i64) -> Self {
        if data_bits <= 0 {
            return ParityPositionTable {
                matrix: BinaryMatrix::empty(),
            };
        }

        let n = data_bits as usize;
        let k = parity_bits_for(n);
        let width = n + k;
        let mut matrix = BinaryMatrix::zeros(k + 1, width + 1);

        let mut threshold = 1;
        for position in 1..=width {
            if position == threshold {
                matrix.set(0, position, true);
                threshold <<= 1;
            }
            for row in 1..=k {
                matrix.set(row, position, (position >> (row - 1)) & 1 == 1);
            }
        }

        ParityPositionTable { matrix }
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Number of rows including the header.
    pub fn height(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of columns including the placeholder for position 0.
    pub fn width(&self) -> usize {
        self.matrix.ncols()
    }

    /// Highest codeword position the table covers.
    pub fn max_position(&self) -> usize {
        self.width().saturating_sub(1)
    }

    /// True when `position` holds a parity bit.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end of the table.
    pub fn is_parity(&self, position: usize) -> bool {
        self.matrix.get(0, position) == 1
    }

    /// Entry of data row `row` (1-based) at `position`.
    pub fn bit(&self, row: usize, position: usize) -> u8 {
        self.matrix.get(row, position)
    }

    /// Data positions in increasing order.
    pub fn data_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.max_position()).filter(|&p| !self.is_parity(p))
    }

    pub fn matrix(&self) -> &BinaryMatrix {
        &self.matrix
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.matrix.rows()
    }
}

/// Smallest `k` with `n + k + 1 <= 2^k`.
pub fn parity_bits_for(data_bits: usize) -> usize {
    let mut k = 0;
    while data_bits + k + 1 > 1 << k {
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_non_positive() {
        assert!(ParityPositionTable::build(0).is_empty());
        assert!(ParityPositionTable::build(-7).is_empty());
        assert!(ParityPositionTable::build(0).rows().is_empty());
    }

    #[test]
    fn test_build_1() {
        let table = ParityPositionTable::build(1);
        assert_eq!(
            table.rows(),
            vec![vec![0, 1, 1, 0], vec![0, 1, 0, 1], vec![0, 0, 1, 1]]
        );
    }

    #[test]
    fn test_build_4() {
        let table = ParityPositionTable::build(4);
        assert_eq!(
            table.rows(),
            vec![
                vec![0, 1, 1, 0, 1, 0, 0, 0],
                vec![0, 1, 0, 1, 0, 1, 0, 1],
                vec![0, 0, 1, 1, 0, 0, 1, 1],
                vec![0, 0, 0, 0, 1, 1, 1, 1],
            ]
        );
        assert_eq!(table.data_positions().collect::<Vec<_>>(), vec![3, 5, 6, 7]);
    }

    #[test]
    fn test_columns_spell_positions() {
        for n in 1..=40 {
            let table = ParityPositionTable::build(n);
            for position in 0..=table.max_position() {
                let value: usize = (1..table.height())
                    .map(|row| (table.bit(row, position) as usize) << (row - 1))
                    .sum();
                assert_eq!(value, position, "n = {}", n);
                assert_eq!(table.is_parity(position), position.is_power_of_two());
            }
        }
    }

    #[test]
    fn test_parity_bits_for() {
        assert_eq!(parity_bits_for(1), 2);
        assert_eq!(parity_bits_for(4), 3);
        assert_eq!(parity_bits_for(5), 4);
        assert_eq!(parity_bits_for(11), 4);
        assert_eq!(parity_bits_for(12), 5);
        assert_eq!(parity_bits_for(26), 5);
        assert_eq!(parity_bits_for(27), 6);
    }
}
