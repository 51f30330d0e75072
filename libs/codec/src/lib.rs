//! # Order Wire Codec
//!
//! ## Purpose
//!
//! Converts between the packed 38-byte [`WireOrder`](types::WireOrder) and the
//! native [`Order`](types::Order):
//! - **decode**: bounds check, big-endian conversion, price bit
//!   reinterpretation, then field validation. Pure; never records anything.
//! - **encode**: the inverse transform. Trusts its input and always succeeds.
//! - **timed decode**: a caller-applied wrapper that reads a cycle clock
//!   around `decode` and records one sample per successful decode.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → caller glue → libs/transport
//!     ↑           ↓
//! Order      decode/encode
//! WireOrder  validation, timing
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Socket or file I/O (callers supply and consume byte buffers)
//! - Queueing (the SPSC channel lives in `transport`)
//!
//! ## Performance Profile
//!
//! - **Decode**: one 38-byte copy, five byte swaps, three checks; no allocation
//! - **Encode**: one 38-byte write into a stack array; no allocation
//! - **Error path**: diagnostic context is plain data, no formatting until displayed

pub mod builder;
pub mod constants;
pub mod error;
pub mod parser;
pub mod timed;
pub mod validation;

pub use builder::{encode, encode_into, OrderBuilder};
pub use constants::*;
pub use error::{ErrorKind, ProtocolError, ProtocolResult};
pub use parser::decode;
pub use timed::{decode_timed, decode_timed_with, DecodeStats, TimedDecoder};
pub use validation::{validate_order_type, validate_price, validate_quantity, validate_side, validate_symbol};
