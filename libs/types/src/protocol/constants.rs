//! Protocol constants
//!
//! These sizes are part of the wire contract and of the in-memory layout
//! contract; both record types assert against them at compile time.

/// Encoded order size on the wire (no padding)
pub const WIRE_ORDER_SIZE: usize = 38;

/// In-memory order size (one cache line)
pub const ORDER_SIZE: usize = 64;

/// Fixed symbol field width
pub const SYMBOL_LEN: usize = 8;

/// Byte offsets of each wire field
pub mod offsets {
    pub const ORDER_ID: usize = 0;
    pub const TIMESTAMP_NS: usize = 8;
    pub const PRICE: usize = 16;
    pub const QUANTITY: usize = 24;
    pub const SYMBOL: usize = 28;
    pub const SIDE: usize = 36;
    pub const ORDER_TYPE: usize = 37;
}
