//! # Order Decoder
//!
//! Turns the first 38 bytes of a receive buffer into a validated [`Order`].
//!
//! The wire record is copied out with `read_from_prefix`, which has no
//! alignment requirement, so the caller may hand in any slice of a larger
//! buffer. Bytes past the first record are ignored.
//!
//! ## Steps
//!
//! 1. Bounds check (`len >= 38`, else [`ProtocolError::Truncated`])
//! 2. Big-endian to host order for id, timestamp, price bits and quantity
//! 3. `f64::from_bits` on the corrected price integer
//! 4. Validation, first failure wins (see [`crate::validation`])

use crate::error::{ProtocolError, ProtocolResult};
use crate::validation::{
    validate_order_type, validate_price, validate_quantity, validate_side, validate_symbol,
};
use types::{Order, WireOrder, WIRE_ORDER_SIZE};
use zerocopy::FromBytes;

/// Decode and validate one order from the start of `bytes`
///
/// Never returns a partially decoded order and never records timing; wrap
/// with [`decode_timed`](crate::decode_timed) for that.
#[inline]
pub fn decode(bytes: &[u8]) -> ProtocolResult<Order> {
    let wire = WireOrder::read_from_prefix(bytes)
        .ok_or_else(|| ProtocolError::truncated(WIRE_ORDER_SIZE, bytes.len()))?;

    let price = f64::from_bits(wire.price.get());
    let quantity = wire.quantity.get();

    validate_symbol(&wire.symbol)?;
    validate_price(price)?;
    validate_quantity(quantity)?;
    let side = validate_side(wire.side)?;
    let order_type = validate_order_type(wire.order_type)?;

    Ok(Order::new(
        wire.order_id.get(),
        wire.timestamp_ns.get(),
        wire.symbol,
        price,
        quantity,
        side,
        order_type,
    ))
}
