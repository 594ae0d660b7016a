use thiserror::Error;

/// Errors produced while building or running a Hamming code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested number of data bits cannot describe a code.
    #[error("invalid number of data bits: {0}")]
    InvalidBitCount(i64),

    /// A vector length that no positive data-bit count produces.
    #[error("invalid codeword length: {0}")]
    InvalidLength(usize),

    /// A GF(2) product was attempted with mismatched operands.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
