//! Fixed-width instrument symbol
//!
//! Symbols travel as exactly 8 raw bytes. Shorter symbols are terminated by a
//! null byte; anything after the first null is carried but never inspected.

use super::errors::SymbolError;
use crate::protocol::constants::SYMBOL_LEN;
use std::fmt;
use std::str::FromStr;
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

/// 8-byte symbol field, optionally null-terminated
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct Symbol([u8; SYMBOL_LEN]);

impl Symbol {
    /// All-null symbol
    pub const EMPTY: Symbol = Symbol([0; SYMBOL_LEN]);

    /// Wrap raw field bytes verbatim, without validation
    #[inline]
    pub const fn from_bytes(bytes: [u8; SYMBOL_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a symbol from text, rejecting anything the wire validation would reject
    pub fn new(text: &str) -> Result<Self, SymbolError> {
        let bytes = text.as_bytes();
        if bytes.len() > SYMBOL_LEN {
            return Err(SymbolError::TooLong {
                len: bytes.len(),
                max: SYMBOL_LEN,
            });
        }

        let symbol = Self::truncating(bytes);
        match symbol.first_invalid_byte() {
            Some((offset, byte)) => Err(SymbolError::NotAlphanumeric { offset, byte }),
            None => Ok(symbol),
        }
    }

    /// Copy at most 8 bytes of `bytes`, null-filling the remainder
    pub fn truncating(bytes: &[u8]) -> Self {
        let mut field = [0u8; SYMBOL_LEN];
        let len = bytes.len().min(SYMBOL_LEN);
        field[..len].copy_from_slice(&bytes[..len]);
        Self(field)
    }

    /// Raw field bytes, including anything after the terminator
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SYMBOL_LEN] {
        &self.0
    }

    /// Bytes up to (not including) the first null
    #[inline]
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(SYMBOL_LEN);
        &self.0[..end]
    }

    /// Symbol text, if the bytes before the terminator are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.trimmed()).ok()
    }

    /// Offset and value of the first non-alphanumeric byte before the terminator
    #[inline]
    pub fn first_invalid_byte(&self) -> Option<(usize, u8)> {
        self.trimmed()
            .iter()
            .position(|b| !b.is_ascii_alphanumeric())
            .map(|offset| (offset, self.0[offset]))
    }

    /// True when every byte before the terminator is ASCII alphanumeric
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.first_invalid_byte().is_none()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "Symbol({:?})", text),
            None => write!(f, "Symbol({:02x?})", self.0),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.trimmed()))
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<[u8; SYMBOL_LEN]> for Symbol {
    fn from(bytes: [u8; SYMBOL_LEN]) -> Self {
        Self(bytes)
    }
}
