//! Dense binary matrices over GF(2).
//!
//! Addition in GF(2) is XOR and multiplication is AND, so the dot product of a
//! matrix row with a vector is the parity of the positions where both are 1.
//! Rows are stored bit-packed, one `BitVec` per row.
//!
//! Vectors at the crate boundary are plain `u8` slices holding 0 or 1, which
//! is what callers print and compare.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// A row-major binary matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: Vec<BitVec<u8, Lsb0>>,
    cols: usize,
}

impl BinaryMatrix {
    /// Creates an all-zero matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BinaryMatrix {
            rows: vec![bitvec![u8, Lsb0; 0; cols]; rows],
            cols,
        }
    }

    /// The 0 x 0 matrix. Builders return this for data-bit counts that
    /// describe no code.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a matrix from rows of 0/1 values.
    ///
    /// Every row must have the same length and hold only 0 or 1.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::zeros(0, cols);

        for row in rows {
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            matrix.push_row(row)?;
        }

        Ok(matrix)
    }

    /// Appends a row of 0/1 values. The row length must match `ncols`, except
    /// for the first row pushed into an empty matrix, which fixes it.
    pub fn push_row(&mut self, row: &[u8]) -> Result<()> {
        if self.rows.is_empty() && self.cols == 0 {
            self.cols = row.len();
        }
        if row.len() != self.cols {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                actual: row.len(),
            });
        }

        let mut bits = bitvec![u8, Lsb0; 0; self.cols];
        for (j, &value) in row.iter().enumerate() {
            bits.set(j, to_bit(value)?);
        }
        self.rows.push(bits);
        Ok(())
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Returns true for a matrix with no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entry at row `i`, column `j` as 0 or 1.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of range.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        u8::from(self.rows[i][j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        self.rows[i].set(j, value);
    }

    /// Row `i` as a vector of 0/1 values.
    pub fn row(&self, i: usize) -> Vec<u8> {
        self.rows[i].iter().map(|bit| u8::from(*bit)).collect()
    }

    /// All rows as vectors of 0/1 values.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.nrows()).map(|i| self.row(i)).collect()
    }

    /// Number of ones in row `i`.
    pub fn row_weight(&self, i: usize) -> usize {
        self.rows[i].count_ones()
    }

    /// Column indices of the ones in row `i`, in increasing order.
    pub fn ones_in_row(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[i].iter_ones()
    }

    /// Computes `self * v` over GF(2).
    ///
    /// `v` must have `ncols` entries, each 0 or 1.
    pub fn mul_vec(&self, v: &[u8]) -> Result<Vec<u8>> {
        if v.len() != self.cols {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                actual: v.len(),
            });
        }
        let v = to_bitvec(v)?;

        Ok(self
            .rows
            .iter()
            .map(|row| {
                let ones = row.iter_ones().filter(|&j| v[j]).count();
                (ones % 2) as u8
            })
            .collect())
    }

    /// Copies rows `rows` and columns `cols` into a new matrix.
    pub fn submatrix(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> BinaryMatrix {
        let width = cols.len();
        BinaryMatrix {
            rows: self.rows[rows]
                .iter()
                .map(|row| row[cols.clone()].to_bitvec())
                .collect(),
            cols: width,
        }
    }
}

/// Converts a slice of 0/1 values into a bit vector.
pub fn to_bitvec(v: &[u8]) -> Result<BitVec<u8, Lsb0>> {
    let mut bits = bitvec![u8, Lsb0; 0; v.len()];
    for (i, &value) in v.iter().enumerate() {
        bits.set(i, to_bit(value)?);
    }
    Ok(bits)
}

/// Rejects any symbol other than 0 or 1.
pub fn check_binary(v: &[u8]) -> Result<()> {
    v.iter().try_for_each(|&value| to_bit(value).map(|_| ()))
}

fn to_bit(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(Error::InvalidInput(format!(
            "expected a binary symbol, found {}",
            other
        ))),
    }
}
