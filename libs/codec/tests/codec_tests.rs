//! # Codec Integration Tests
//!
//! Exercises the public API the way a producer does:
//! - Byte-exact wire layout against hand-written fixtures
//! - Truncation and validation precedence
//! - Round-trip of every valid order (proptest)

use codec::{
    decode, decode_timed, encode, offsets, OrderBuilder, ProtocolError, WIRE_ORDER_SIZE,
};
use hex_literal::hex;
use latency::LatencyRecorder;
use proptest::prelude::*;
use types::{Order, OrderType, Side, Symbol};

/// Builder defaults, encoded by hand
const DEFAULT_ORDER_WIRE: [u8; 38] = hex!(
    "0000000000000001" // order_id 1
    "00000000075bcd15" // timestamp 123456789
    "4045400000000000" // price 42.5
    "00000064"         // quantity 100
    "4141504c00000000" // "AAPL"
    "01"               // buy
    "01"               // market
);

#[test]
fn test_default_order_matches_fixture() {
    assert_eq!(OrderBuilder::new().wire(), DEFAULT_ORDER_WIRE);
}

#[test]
fn test_fixture_decodes() {
    let order = decode(&DEFAULT_ORDER_WIRE).unwrap();
    assert_eq!(order, OrderBuilder::new().build());
}

#[test]
fn test_order_id_one_is_big_endian() {
    let bytes = OrderBuilder::new().order_id(1).wire();
    assert_eq!(&bytes[0..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_quantity_256_is_big_endian() {
    let bytes = OrderBuilder::new().quantity(256).wire();
    assert_eq!(
        &bytes[offsets::QUANTITY..offsets::QUANTITY + 4],
        &[0x00, 0x00, 0x01, 0x00]
    );
}

#[test]
fn test_sell_fixture() {
    let bytes = hex!(
        "00000000000003e8" // order_id 1000
        "0000000000000000" // timestamp 0
        "3ff0000000000000" // price 1.0
        "00000001"         // quantity 1
        "4d53465400000000" // "MSFT"
        "ff"               // sell
        "00"               // limit
    );
    let order = decode(&bytes).unwrap();
    assert_eq!(order.order_id, 1000);
    assert_eq!(order.price, 1.0);
    assert_eq!(order.symbol.as_str(), Some("MSFT"));
    assert_eq!(order.side, Side::Sell);
    assert_eq!(order.order_type, OrderType::Limit);
}

#[test]
fn test_every_short_length_is_truncated() {
    let bytes = OrderBuilder::new().wire();
    for len in 0..WIRE_ORDER_SIZE {
        assert_eq!(
            decode(&bytes[..len]),
            Err(ProtocolError::Truncated {
                need: WIRE_ORDER_SIZE,
                got: len
            }),
            "length {len}"
        );
    }
}

#[test]
fn test_symbol_error_wins_over_price_error() {
    let bytes = OrderBuilder::new().symbol("AB@C").price(-3.0).wire();
    assert!(matches!(
        decode(&bytes),
        Err(ProtocolError::InvalidSymbol {
            offset: 2,
            byte: b'@',
            ..
        })
    ));
}

#[test]
fn test_price_error_wins_over_quantity_error() {
    let bytes = OrderBuilder::new().price(0.0).quantity(0).wire();
    assert_eq!(decode(&bytes), Err(ProtocolError::InvalidPrice { price: 0.0 }));
}

#[test]
fn test_nan_price_rejected() {
    let bytes = OrderBuilder::new().price(f64::NAN).wire();
    assert!(matches!(decode(&bytes), Err(ProtocolError::InvalidPrice { .. })));
}

#[test]
fn test_out_of_range_tags_rejected() {
    let mut bytes = OrderBuilder::new().wire();
    bytes[offsets::SIDE] = 0x02;
    assert_eq!(decode(&bytes), Err(ProtocolError::InvalidSide { tag: 0x02 }));

    let mut bytes = OrderBuilder::new().wire();
    bytes[offsets::ORDER_TYPE] = 0xFF;
    assert_eq!(
        decode(&bytes),
        Err(ProtocolError::InvalidOrderType { tag: 0xFF })
    );
}

#[test]
fn test_empty_symbol_accepted() {
    let bytes = OrderBuilder::new().symbol_bytes(Symbol::EMPTY).wire();
    assert_eq!(decode(&bytes).unwrap().symbol, Symbol::EMPTY);
}

#[test]
fn test_timed_decode_feeds_recorder() {
    let mut recorder = LatencyRecorder::with_capacity(1024).unwrap();
    for i in 0..100u64 {
        let bytes = OrderBuilder::new().order_id(i).quantity(10 + (i % 100) as u32).wire();
        decode_timed(&bytes, &mut recorder).unwrap();
    }
    let _ = decode_timed(&[0u8; 3], &mut recorder);

    assert_eq!(recorder.len(), 100);
    let stats = *recorder.analyze(recorder.capacity()).stats().unwrap();
    assert_eq!(stats.count, 100);
    assert!(stats.min <= stats.p50 && stats.p50 <= stats.max);
}

fn symbol_strategy() -> impl Strategy<Value = Symbol> {
    "[A-Za-z0-9]{0,8}".prop_map(|text| Symbol::truncating(text.as_bytes()))
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn order_type_strategy() -> impl Strategy<Value = OrderType> {
    prop_oneof![
        Just(OrderType::Limit),
        Just(OrderType::Market),
        Just(OrderType::Stop)
    ]
}

fn valid_order_strategy() -> impl Strategy<Value = Order> {
    (
        any::<u64>(),
        any::<u64>(),
        symbol_strategy(),
        (f64::MIN_POSITIVE..f64::MAX),
        1..=u32::MAX,
        side_strategy(),
        order_type_strategy(),
    )
        .prop_map(|(id, ts, symbol, price, qty, side, order_type)| {
            Order::new(id, ts, symbol, price, qty, side, order_type)
        })
}

proptest! {
    #[test]
    fn prop_round_trip(order in valid_order_strategy()) {
        let decoded = decode(&encode(&order)).unwrap();
        prop_assert_eq!(decoded.order_id, order.order_id);
        prop_assert_eq!(decoded.timestamp_ns, order.timestamp_ns);
        prop_assert_eq!(decoded.symbol, order.symbol);
        prop_assert_eq!(decoded.price.to_bits(), order.price.to_bits());
        prop_assert_eq!(decoded.quantity, order.quantity);
        prop_assert_eq!(decoded.side, order.side);
        prop_assert_eq!(decoded.order_type, order.order_type);
    }

    #[test]
    fn prop_short_buffers_never_decode(bytes in prop::collection::vec(any::<u8>(), 0..WIRE_ORDER_SIZE)) {
        prop_assert!(
            matches!(decode(&bytes), Err(ProtocolError::Truncated { .. })),
            "truncated buffer must be rejected"
        );
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..80)) {
        let _ = decode(&bytes);
    }
}
