//! # Codec Constants
//!
//! Sizes re-exported from the types crate so codec callers need only one
//! import, plus the defaults used by the test-data builder.

pub use types::protocol::constants::offsets;
pub use types::{ORDER_SIZE, SYMBOL_LEN, WIRE_ORDER_SIZE};

/// Default order id for built test orders
pub const DEFAULT_ORDER_ID: u64 = 1;

/// Default timestamp for built test orders
pub const DEFAULT_TIMESTAMP_NS: u64 = 123_456_789;

/// Default price for built test orders
pub const DEFAULT_PRICE: f64 = 42.5;

/// Default quantity for built test orders
pub const DEFAULT_QUANTITY: u32 = 100;

/// Default symbol for built test orders
pub const DEFAULT_SYMBOL: &str = "AAPL";
