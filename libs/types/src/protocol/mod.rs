//! Protocol layer: wire layout and its size constants
//!
//! Conversion between [`WireOrder`] and [`Order`](crate::Order) lives in the
//! codec crate; this module only fixes the byte layout.

pub mod constants;
pub mod wire;

pub use constants::{ORDER_SIZE, SYMBOL_LEN, WIRE_ORDER_SIZE};
pub use wire::WireOrder;
