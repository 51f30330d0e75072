//! # Order Encoder and Test-Data Builder
//!
//! [`encode`] is the inverse of [`decode`](crate::decode): host-order fields
//! are written big-endian into a 38-byte array, the price as its raw IEEE-754
//! bit pattern. It trusts the order it is given and never validates, so tests
//! can produce invalid buffers on purpose.
//!
//! [`OrderBuilder`] fills in sensible defaults so tests and the benchmark
//! driver only set the fields they care about:
//!
//! ```rust
//! use codec::{decode, OrderBuilder};
//! use types::Side;
//!
//! let bytes = OrderBuilder::new().order_id(42).price(101.25).side(Side::Sell).wire();
//! let order = decode(&bytes).unwrap();
//! assert_eq!(order.order_id, 42);
//! assert_eq!(order.side, Side::Sell);
//! ```

use crate::constants::{
    DEFAULT_ORDER_ID, DEFAULT_PRICE, DEFAULT_QUANTITY, DEFAULT_SYMBOL, DEFAULT_TIMESTAMP_NS,
};
use crate::error::{ProtocolError, ProtocolResult};
use types::{Order, OrderType, Side, Symbol, WireOrder, WIRE_ORDER_SIZE};
use zerocopy::byteorder::{U32, U64};
use zerocopy::AsBytes;

#[inline]
fn to_wire(order: &Order) -> WireOrder {
    WireOrder {
        order_id: U64::new(order.order_id),
        timestamp_ns: U64::new(order.timestamp_ns),
        price: U64::new(order.price.to_bits()),
        quantity: U32::new(order.quantity),
        symbol: order.symbol,
        side: order.side.wire_tag(),
        order_type: order.order_type.wire_tag(),
    }
}

/// Encode an order into its 38-byte wire form
#[inline]
pub fn encode(order: &Order) -> [u8; WIRE_ORDER_SIZE] {
    let mut bytes = [0u8; WIRE_ORDER_SIZE];
    bytes.copy_from_slice(to_wire(order).as_bytes());
    bytes
}

/// Encode an order into the start of `buffer`, returning the bytes written
///
/// Fails with [`ProtocolError::BufferTooSmall`] without touching `buffer`
/// when it is shorter than one wire order.
#[inline]
pub fn encode_into(order: &Order, buffer: &mut [u8]) -> ProtocolResult<usize> {
    let got = buffer.len();
    let target = buffer
        .get_mut(..WIRE_ORDER_SIZE)
        .ok_or(ProtocolError::BufferTooSmall {
            need: WIRE_ORDER_SIZE,
            got,
        })?;
    target.copy_from_slice(to_wire(order).as_bytes());
    Ok(WIRE_ORDER_SIZE)
}

/// Builder for test and benchmark orders
///
/// Defaults: id 1, timestamp 123456789, price 42.5, quantity 100,
/// symbol "AAPL", buy, market.
#[derive(Debug, Clone, Copy)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            order: Order::new(
                DEFAULT_ORDER_ID,
                DEFAULT_TIMESTAMP_NS,
                Symbol::truncating(DEFAULT_SYMBOL.as_bytes()),
                DEFAULT_PRICE,
                DEFAULT_QUANTITY,
                Side::Buy,
                OrderType::Market,
            ),
        }
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order.order_id = order_id;
        self
    }

    pub fn timestamp_ns(mut self, timestamp_ns: u64) -> Self {
        self.order.timestamp_ns = timestamp_ns;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.order.price = price;
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.order.quantity = quantity;
        self
    }

    /// Set the symbol from text, keeping at most the first 8 bytes
    ///
    /// Content is not checked; use [`Symbol::new`] for a checked symbol.
    pub fn symbol(mut self, symbol: &str) -> Self {
        self.order.symbol = Symbol::truncating(symbol.as_bytes());
        self
    }

    /// Set the raw symbol bytes
    pub fn symbol_bytes(mut self, symbol: Symbol) -> Self {
        self.order.symbol = symbol;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.order.side = side;
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order.order_type = order_type;
        self
    }

    /// The native order
    pub fn build(self) -> Order {
        self.order
    }

    /// The encoded wire bytes
    pub fn wire(self) -> [u8; WIRE_ORDER_SIZE] {
        encode(&self.order)
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
