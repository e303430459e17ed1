//! Error types for the huffrs library.

use std::fmt;

/// Result type alias for huffrs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during compression or decompression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Huffman tree was requested for an all-zero frequency table.
    NoSymbols,
    /// The input uses all 256 distinct byte values, which cannot be
    /// represented in the one-byte symbol count field.
    TooManySymbols(usize),
    /// A byte value occurs more often than the 4-byte frequency field
    /// can store.
    FrequencyOverflow {
        /// The byte value whose count overflowed.
        byte: u8,
        /// The observed count.
        count: u64,
    },
    /// The header claims more symbol entries than the data contains.
    TruncatedHeader {
        /// Number of bytes the header requires.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },
    /// The header's padding count is outside the valid 0-7 range.
    InvalidPadding(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSymbols => {
                write!(f, "Cannot build a Huffman tree from an empty frequency table")
            }
            Error::TooManySymbols(n) => {
                write!(f, "Input has {} distinct byte values: at most 255 supported", n)
            }
            Error::FrequencyOverflow { byte, count } => {
                write!(
                    f,
                    "Frequency {} of byte 0x{:02X} exceeds the 32-bit header field",
                    count, byte
                )
            }
            Error::TruncatedHeader { expected, actual } => {
                write!(
                    f,
                    "Truncated header: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Error::InvalidPadding(bits) => {
                write!(f, "Invalid padding count {}: must be 0-7", bits)
            }
        }
    }
}

impl std::error::Error for Error {}
