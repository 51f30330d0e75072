//! Wire Order Layout
//!
//! The on-the-wire order record. Every field is a byte array or an unaligned
//! big-endian integer, so the struct has alignment 1, no padding, and can be
//! read from any offset of a receive buffer.
//!
//! ```text
//! ┌──────────┬──────────────┬─────────────┬──────────┬──────────┬────┬────┐
//! │ order_id │ timestamp_ns │ price bits  │ quantity │ symbol   │side│type│
//! │ u64 BE   │ u64 BE       │ u64 BE      │ u32 BE   │ [u8; 8]  │ u8 │ u8 │
//! │ 0..8     │ 8..16        │ 16..24      │ 24..28   │ 28..36   │ 36 │ 37 │
//! └──────────┴──────────────┴─────────────┴──────────┴──────────┴────┴────┘
//! ```

use super::constants::WIRE_ORDER_SIZE;
use crate::common::symbol::Symbol;
use std::mem::{align_of, size_of};
use zerocopy::byteorder::{BigEndian, U32, U64};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

/// Wire Order (38 bytes)
///
/// `price` holds the IEEE-754 bit pattern of the native `f64`, byte-swapped
/// as an integer. It is never a numeric conversion.
///
/// **CRITICAL**: field order is the wire contract. DO NOT REORDER.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct WireOrder {
    pub order_id: U64<BigEndian>,
    pub timestamp_ns: U64<BigEndian>,
    pub price: U64<BigEndian>,
    pub quantity: U32<BigEndian>,
    pub symbol: Symbol,
    pub side: u8,
    pub order_type: u8,
}
// Total: EXACTLY 38 bytes with zero padding

const _: () = assert!(size_of::<WireOrder>() == WIRE_ORDER_SIZE);
const _: () = assert!(align_of::<WireOrder>() == 1);

impl WireOrder {
    /// Encoded size in bytes
    pub const SIZE: usize = WIRE_ORDER_SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::offsets;

    #[test]
    fn test_wire_order_is_packed() {
        assert_eq!(size_of::<WireOrder>(), 38);
        assert_eq!(align_of::<WireOrder>(), 1);
    }

    #[test]
    fn test_field_offsets_match_contract() {
        let mut wire = WireOrder::new_zeroed();
        wire.quantity = U32::new(0xAABBCCDD);
        wire.side = 0x11;
        wire.order_type = 0x22;

        let bytes = wire.as_bytes();
        assert_eq!(
            &bytes[offsets::QUANTITY..offsets::QUANTITY + 4],
            &[0xAA, 0xBB, 0xCC, 0xDD]
        );
        assert_eq!(bytes[offsets::SIDE], 0x11);
        assert_eq!(bytes[offsets::ORDER_TYPE], 0x22);
    }

    #[test]
    fn test_read_from_unaligned_offset() {
        let mut buf = [0u8; 40];
        buf[1 + offsets::ORDER_ID + 7] = 0x2A;
        buf[1 + offsets::SYMBOL..1 + offsets::SYMBOL + 3].copy_from_slice(b"IBM");

        let wire = WireOrder::read_from_prefix(&buf[1..]).unwrap();
        assert_eq!(wire.order_id.get(), 42);
        assert_eq!(wire.symbol.trimmed(), b"IBM");
    }

    #[test]
    fn test_short_buffer_does_not_read() {
        let buf = [0u8; 37];
        assert!(WireOrder::read_from_prefix(&buf[..]).is_none());
    }
}
