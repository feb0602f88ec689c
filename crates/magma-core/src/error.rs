//! Error types for the magma-core library.

use std::fmt;

/// Errors produced by the magma-core library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagmaError {
    /// Buffer length is not a multiple of the 8-byte block size.
    BufferLength(usize),
    /// Substitution table does not have exactly 8 rows of 16 entries.
    TableShape,
    /// A substitution table row is not a permutation of 0..=15.
    TableRowNotPermutation(usize),
    /// Worker count for parallel processing is zero.
    WorkerCount,
}

impl fmt::Display for MagmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagmaError::BufferLength(len) => {
                write!(
                    f,
                    "buffer length {} is not a multiple of the 8-byte block size",
                    len
                )
            }
            MagmaError::TableShape => {
                write!(f, "substitution table must have 8 rows of 16 entries")
            }
            MagmaError::TableRowNotPermutation(row) => {
                write!(
                    f,
                    "substitution table row {} is not a permutation of 0..=15",
                    row
                )
            }
            MagmaError::WorkerCount => {
                write!(f, "worker count must be at least 1")
            }
        }
    }
}

impl std::error::Error for MagmaError {}
