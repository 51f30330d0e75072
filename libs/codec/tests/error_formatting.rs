//! Error formatting tests
//!
//! Display output is for operators reading logs; Debug output keeps every
//! field for structured diagnostics.

use codec::{decode, encode_into, ErrorKind, OrderBuilder, ProtocolError};

#[test]
fn test_truncated_formatting() {
    let error = decode(&[0u8; 16]).unwrap_err();

    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("Truncated"));
    assert!(debug_output.contains("38"));
    assert!(debug_output.contains("16"));

    let display_output = format!("{}", error);
    assert_eq!(display_output, "Truncated order: need 38 bytes, got 16");
}

#[test]
fn test_invalid_symbol_formatting() {
    let bytes = OrderBuilder::new().symbol("AB#C").wire();
    let error = decode(&bytes).unwrap_err();

    let display_output = error.to_string();
    assert!(display_output.contains("0x23")); // '#'
    assert!(display_output.contains("offset 2"));
    assert!(display_output.contains("41, 42, 23, 43")); // raw symbol bytes in hex

    assert_eq!(error.kind(), ErrorKind::InvalidSymbol);
}

#[test]
fn test_invalid_price_formatting() {
    let error = decode(&OrderBuilder::new().price(-12.5).wire()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Invalid price -12.5: must be greater than zero"
    );

    let nan = decode(&OrderBuilder::new().price(f64::NAN).wire()).unwrap_err();
    assert!(nan.to_string().contains("NaN"));
}

#[test]
fn test_invalid_quantity_formatting() {
    let error = decode(&OrderBuilder::new().quantity(0).wire()).unwrap_err();
    assert_eq!(error, ProtocolError::InvalidQuantity);
    assert_eq!(error.to_string(), "Invalid quantity: must be non-zero");
}

#[test]
fn test_invalid_tag_formatting() {
    let mut bytes = OrderBuilder::new().wire();
    bytes[36] = 0x7F;
    let side = decode(&bytes).unwrap_err();
    assert!(side.to_string().contains("0x7f"));
    assert!(side.to_string().contains("0x01 (buy)"));

    let mut bytes = OrderBuilder::new().wire();
    bytes[37] = 9;
    let order_type = decode(&bytes).unwrap_err();
    assert!(order_type.to_string().contains("tag 9"));
}

#[test]
fn test_buffer_too_small_formatting() {
    let order = OrderBuilder::new().build();
    let mut buffer = [0u8; 8];
    let error = encode_into(&order, &mut buffer).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Output buffer too small: need 38 bytes, got 8"
    );
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&ProtocolError::InvalidQuantity);
}
