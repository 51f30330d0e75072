//! Error types for value construction
//!
//! Only construction of typed values can fail here. Wire-level failures are
//! reported by the codec crate.

use thiserror::Error;

/// Errors that can occur when building a [`Symbol`](super::symbol::Symbol)
/// from caller-supplied text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol text does not fit in the fixed 8-byte field
    #[error("Symbol too long: {len} bytes exceeds maximum {max}")]
    TooLong { len: usize, max: usize },

    /// Symbol text contains a byte that is not ASCII alphanumeric
    #[error("Symbol byte {byte:#04x} at offset {offset} is not ASCII alphanumeric")]
    NotAlphanumeric { offset: usize, byte: u8 },
}
