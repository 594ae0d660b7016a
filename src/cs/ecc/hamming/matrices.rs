//! Builders for the generator (G), parity-check (H) and recovery (R) matrices.
//!
//! All three are cut from the parity-position table for the data-bit count.
//! Codeword positions are 1-based in the table and 0-based in the matrices,
//! so column `j` of H and R corresponds to position `j + 1`.

use super::shape::CodewordShape;
use super::table::ParityPositionTable;
use crate::error::{Error, Result};
use crate::math::gf2::BinaryMatrix;
use log::trace;

/// Generator matrix: `(n + k) x n`, rows in codeword position order.
///
/// A parity row is the table row for that parity bit restricted to the data
/// positions, so the parity bit is the mod-2 sum of the data bits it checks.
/// A data row is one-hot and copies the next message bit through.
///
/// Returns an empty matrix for `data_bits <= 0`.
pub fn generator_matrix(data_bits: i64) -> BinaryMatrix {
    let table = ParityPositionTable::build(data_bits);
    match shape_of(&table, data_bits) {
        Some(shape) => generator_from_table(&table, shape),
        None => BinaryMatrix::empty(),
    }
}

/// Parity-check matrix: `k x (n + k)`, column `j` is `j + 1` in binary with
/// the low bit in row 0.
///
/// Returns an empty matrix for `data_bits <= 0`.
pub fn parity_check_matrix(data_bits: i64) -> BinaryMatrix {
    let table = ParityPositionTable::build(data_bits);
    match shape_of(&table, data_bits) {
        Some(shape) => parity_check_from_table(&table, shape),
        None => BinaryMatrix::empty(),
    }
}

/// Recovery matrix for codewords of length `len`: `n x len`, row `i`
/// selects the `i`-th data position.
pub fn recovery_matrix(len: usize) -> Result<BinaryMatrix> {
    let data_bits = data_bits_for_length(len)?;
    let table = ParityPositionTable::build(data_bits as i64);
    let shape = CodewordShape::derive(&table, data_bits)?;
    Ok(recovery_from_table(&table, shape))
}

pub(crate) fn generator_from_table(
    table: &ParityPositionTable,
    shape: CodewordShape,
) -> BinaryMatrix {
    let data_bits = shape.data_bits();
    let data_positions: Vec<usize> = table
        .data_positions()
        .take_while(|&p| p <= shape.width)
        .collect();
    let mut g = BinaryMatrix::zeros(shape.width, data_bits);

    let mut parity_row = 1;
    let mut message_index = 0;
    for position in 1..=shape.width {
        let row = position - 1;
        if table.is_parity(position) {
            for (col, &p) in data_positions.iter().enumerate() {
                g.set(row, col, table.bit(parity_row, p) == 1);
            }
            parity_row += 1;
        } else {
            g.set(row, message_index, true);
            message_index += 1;
        }
    }

    trace!("G for n = {}: {} x {}", data_bits, g.nrows(), g.ncols());
    g
}

pub(crate) fn parity_check_from_table(
    table: &ParityPositionTable,
    shape: CodewordShape,
) -> BinaryMatrix {
    table
        .matrix()
        .submatrix(1..shape.height + 1, 1..shape.width + 1)
}

pub(crate) fn recovery_from_table(
    table: &ParityPositionTable,
    shape: CodewordShape,
) -> BinaryMatrix {
    let mut r = BinaryMatrix::zeros(shape.data_bits(), shape.width);
    for (i, position) in table
        .data_positions()
        .take_while(|&p| p <= shape.width)
        .enumerate()
    {
        r.set(i, position - 1, true);
    }
    r
}

/// Number of data bits carried by a codeword of length `len`.
///
/// Computed as `len - ceil(log2(len))`, then checked against the shape for
/// that count: lengths below 3 and powers of two are not codeword lengths.
pub fn data_bits_for_length(len: usize) -> Result<usize> {
    if len < 3 {
        return Err(Error::InvalidLength(len));
    }
    let data_bits = len - ceil_log2(len);
    match CodewordShape::for_data_bits(data_bits as i64) {
        Ok(shape) if shape.width == len => Ok(data_bits),
        _ => Err(Error::InvalidLength(len)),
    }
}

fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        0
    } else {
        (usize::BITS - (x - 1).leading_zeros()) as usize
    }
}

fn shape_of(table: &ParityPositionTable, data_bits: i64) -> Option<CodewordShape> {
    if table.is_empty() {
        return None;
    }
    CodewordShape::derive(table, data_bits as usize).ok()
}
