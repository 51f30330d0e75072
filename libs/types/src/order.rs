//! Native order record
//!
//! [`Order`] is the decoded, validated form handed between pipeline stages.
//! It occupies exactly one 64-byte cache line so a channel slot never
//! straddles two lines and adjacent slots never share one.

use crate::common::symbol::Symbol;
use crate::protocol::constants::ORDER_SIZE;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::{align_of, size_of};

/// Order side. Travels as a signed byte: 1 for buy, -1 (0xFF) for sell.
#[repr(i8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy = 1,
    Sell = -1,
}

impl Side {
    /// Raw wire byte for this side
    #[inline]
    pub const fn wire_tag(self) -> u8 {
        self as i8 as u8
    }

    /// Parse a raw wire byte, returning `None` for out-of-range tags
    #[inline]
    pub fn from_wire_tag(tag: u8) -> Option<Self> {
        Self::try_from(tag as i8).ok()
    }
}

/// Order type tag
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit = 0,
    Market = 1,
    Stop = 2,
}

impl OrderType {
    /// Raw wire byte for this order type
    #[inline]
    pub const fn wire_tag(self) -> u8 {
        self as u8
    }

    /// Parse a raw wire byte, returning `None` for out-of-range tags
    #[inline]
    pub fn from_wire_tag(tag: u8) -> Option<Self> {
        Self::try_from(tag).ok()
    }
}

/// Decoded market order (64 bytes, cache-line aligned)
///
/// Field order keeps every 8-byte field naturally aligned; the trailing
/// reserved bytes fill the line and are always zero.
///
/// ```text
/// 0        8             16      24     32    36  37  38          64
/// ┌────────┬─────────────┬───────┬──────┬─────┬───┬───┬───────────┐
/// │order_id│ timestamp_ns│ symbol│ price│ qty │sd │ty │ reserved  │
/// └────────┴─────────────┴───────┴──────┴─────┴───┴───┴───────────┘
/// ```
#[repr(C, align(64))]
#[derive(Clone, Copy, PartialEq)]
pub struct Order {
    pub order_id: u64,
    pub timestamp_ns: u64,
    pub symbol: Symbol,
    pub price: f64,
    pub quantity: u32,
    pub side: Side,
    pub order_type: OrderType,
    _reserved: [u8; 26],
}

const _: () = assert!(size_of::<Order>() == ORDER_SIZE);
const _: () = assert!(align_of::<Order>() == ORDER_SIZE);

impl Order {
    /// Create an order from its fields. No validation is performed.
    pub const fn new(
        order_id: u64,
        timestamp_ns: u64,
        symbol: Symbol,
        price: f64,
        quantity: u32,
        side: Side,
        order_type: OrderType,
    ) -> Self {
        Self {
            order_id,
            timestamp_ns,
            symbol,
            price,
            quantity,
            side,
            order_type,
            _reserved: [0; 26],
        }
    }

    /// Notional value (price × quantity)
    #[inline]
    pub fn notional(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new(0, 0, Symbol::EMPTY, 0.0, 0, Side::Buy, OrderType::Limit)
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("order_id", &self.order_id)
            .field("timestamp_ns", &self.timestamp_ns)
            .field("symbol", &self.symbol)
            .field("price", &self.price)
            .field("quantity", &self.quantity)
            .field("side", &self.side)
            .field("order_type", &self.order_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_fills_one_cache_line() {
        assert_eq!(size_of::<Order>(), 64);
        assert_eq!(align_of::<Order>(), 64);
    }

    #[test]
    fn test_side_wire_tags() {
        assert_eq!(Side::Buy.wire_tag(), 0x01);
        assert_eq!(Side::Sell.wire_tag(), 0xFF);
        assert_eq!(Side::from_wire_tag(0x01), Some(Side::Buy));
        assert_eq!(Side::from_wire_tag(0xFF), Some(Side::Sell));
        assert_eq!(Side::from_wire_tag(0x00), None);
        assert_eq!(Side::from_wire_tag(0x02), None);
    }

    #[test]
    fn test_order_type_wire_tags() {
        assert_eq!(OrderType::from_wire_tag(0), Some(OrderType::Limit));
        assert_eq!(OrderType::from_wire_tag(1), Some(OrderType::Market));
        assert_eq!(OrderType::from_wire_tag(2), Some(OrderType::Stop));
        assert_eq!(OrderType::from_wire_tag(3), None);
        assert_eq!(OrderType::Stop.wire_tag(), 2);
    }

    #[test]
    fn test_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
        let parsed: OrderType = serde_json::from_str("\"market\"").unwrap();
        assert_eq!(parsed, OrderType::Market);
    }

    #[test]
    fn test_order_new_and_notional() {
        let order = Order::new(
            7,
            1_000,
            Symbol::new("MSFT").unwrap(),
            12.5,
            4,
            Side::Sell,
            OrderType::Stop,
        );
        assert_eq!(order.notional(), 50.0);
        assert_eq!(order.symbol.as_str(), Some("MSFT"));
        assert_ne!(order, Order::default());
    }

    #[test]
    fn test_debug_omits_reserved_bytes() {
        let formatted = format!("{:?}", Order::default());
        assert!(!formatted.contains("reserved"));
        assert!(formatted.contains("order_type: Limit"));
    }
}
