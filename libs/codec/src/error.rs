//! Protocol-level errors for order decoding and encoding
//!
//! Decoding either yields a fully validated order or exactly one of these
//! variants; there is no partially decoded result. Every variant carries the
//! offending value so a rejected buffer can be diagnosed from the error alone.

use thiserror::Error;
use types::SYMBOL_LEN;

/// Order codec errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// Input buffer is shorter than one wire order
    #[error("Truncated order: need {need} bytes, got {got}")]
    Truncated { need: usize, got: usize },

    /// A symbol byte before the terminator is not ASCII alphanumeric
    #[error("Invalid symbol {symbol:02x?}: byte {byte:#04x} at offset {offset} is not alphanumeric")]
    InvalidSymbol {
        symbol: [u8; SYMBOL_LEN],
        offset: usize,
        byte: u8,
    },

    /// Price is zero, negative or NaN
    #[error("Invalid price {price}: must be greater than zero")]
    InvalidPrice { price: f64 },

    /// Quantity is zero
    #[error("Invalid quantity: must be non-zero")]
    InvalidQuantity,

    /// Side tag is neither 0x01 (buy) nor 0xFF (sell)
    #[error("Invalid side tag {tag:#04x}: expected 0x01 (buy) or 0xff (sell)")]
    InvalidSide { tag: u8 },

    /// Order type tag is outside 0..=2
    #[error("Invalid order type tag {tag}: expected 0 (limit), 1 (market) or 2 (stop)")]
    InvalidOrderType { tag: u8 },

    /// Output buffer cannot hold one wire order
    #[error("Output buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },
}

/// Payload-free discriminant of [`ProtocolError`], for counting failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Truncated,
    InvalidSymbol,
    InvalidPrice,
    InvalidQuantity,
    InvalidSide,
    InvalidOrderType,
    BufferTooSmall,
}

impl ProtocolError {
    /// Create a Truncated error for an input of `got` bytes
    pub fn truncated(need: usize, got: usize) -> Self {
        Self::Truncated { need, got }
    }

    /// Create an InvalidSymbol error pointing at the first bad byte
    pub fn invalid_symbol(symbol: [u8; SYMBOL_LEN], offset: usize, byte: u8) -> Self {
        Self::InvalidSymbol {
            symbol,
            offset,
            byte,
        }
    }

    /// Discriminant without diagnostic payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Truncated { .. } => ErrorKind::Truncated,
            Self::InvalidSymbol { .. } => ErrorKind::InvalidSymbol,
            Self::InvalidPrice { .. } => ErrorKind::InvalidPrice,
            Self::InvalidQuantity => ErrorKind::InvalidQuantity,
            Self::InvalidSide { .. } => ErrorKind::InvalidSide,
            Self::InvalidOrderType { .. } => ErrorKind::InvalidOrderType,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
        }
    }
}

/// Result type for codec operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
