//! # Order Pipeline Types
//!
//! Plain data definitions shared by the codec, the transport and the driver.
//!
//! ## Design Philosophy
//!
//! - **Two forms of one order**: [`Order`] is the native, validated,
//!   cache-line sized record; [`WireOrder`] is the packed 38-byte big-endian
//!   form exchanged over a transport.
//! - **No logic beyond shape**: conversion and validation rules live in the
//!   `codec` crate. This crate only guarantees layout and tag ranges.
//! - **Layout is checked at compile time**: both record sizes are asserted so
//!   a field change that introduces padding fails the build.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → services/order_pipeline
//!     ↑             ↓
//! Order        decode/encode
//! WireOrder    validation
//! ```

pub mod common;
pub mod order;
pub mod protocol;

pub use common::errors::SymbolError;
pub use common::symbol::Symbol;
pub use order::{Order, OrderType, Side};
pub use protocol::constants::{ORDER_SIZE, SYMBOL_LEN, WIRE_ORDER_SIZE};
pub use protocol::wire::WireOrder;
