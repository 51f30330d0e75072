//! # Order Field Validation
//!
//! The checks [`decode`](crate::decode) applies, in the order it applies
//! them:
//!
//! ```text
//! symbol → price → quantity → side tag → order type tag
//! ```
//!
//! The first failure wins, so a buffer with both a bad symbol and a bad price
//! reports `InvalidSymbol`. The functions are public so producers can check a
//! record before encoding it; `encode` itself never validates.

use crate::error::{ProtocolError, ProtocolResult};
use types::{OrderType, Side, Symbol};

/// Every byte before the first null must be ASCII alphanumeric
///
/// Bytes after the terminator are not inspected.
#[inline]
pub fn validate_symbol(symbol: &Symbol) -> ProtocolResult<()> {
    match symbol.first_invalid_byte() {
        None => Ok(()),
        Some((offset, byte)) => Err(ProtocolError::invalid_symbol(
            *symbol.as_bytes(),
            offset,
            byte,
        )),
    }
}

/// Price must be strictly positive (NaN fails)
#[inline]
pub fn validate_price(price: f64) -> ProtocolResult<()> {
    if price > 0.0 {
        Ok(())
    } else {
        Err(ProtocolError::InvalidPrice { price })
    }
}

/// Quantity must be non-zero
#[inline]
pub fn validate_quantity(quantity: u32) -> ProtocolResult<()> {
    if quantity != 0 {
        Ok(())
    } else {
        Err(ProtocolError::InvalidQuantity)
    }
}

/// Side tag must be 0x01 or 0xFF
#[inline]
pub fn validate_side(tag: u8) -> ProtocolResult<Side> {
    Side::from_wire_tag(tag).ok_or(ProtocolError::InvalidSide { tag })
}

/// Order type tag must be 0, 1 or 2
#[inline]
pub fn validate_order_type(tag: u8) -> ProtocolResult<OrderType> {
    OrderType::from_wire_tag(tag).ok_or(ProtocolError::InvalidOrderType { tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_rules() {
        assert!(validate_symbol(&Symbol::from_bytes(*b"AAPL\0\0\0\0")).is_ok());
        assert!(validate_symbol(&Symbol::from_bytes(*b"BRK2B7X9")).is_ok());
        assert!(validate_symbol(&Symbol::EMPTY).is_ok());
        // Garbage after the terminator is ignored
        assert!(validate_symbol(&Symbol::from_bytes(*b"GE\0 !@#$")).is_ok());

        let err = validate_symbol(&Symbol::from_bytes(*b"BRK.B\0\0\0")).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::InvalidSymbol {
                symbol: *b"BRK.B\0\0\0",
                offset: 3,
                byte: b'.',
            }
        );
    }

    #[test]
    fn test_leading_space_is_invalid() {
        let err = validate_symbol(&Symbol::from_bytes(*b" AAPL\0\0\0")).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidSymbol { offset: 0, .. }));
    }

    #[test]
    fn test_price_rules() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(f64::INFINITY).is_ok());
        assert!(validate_price(f64::MIN_POSITIVE).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-0.0).is_err());
        assert!(validate_price(-5.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_quantity_rules() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(u32::MAX).is_ok());
        assert_eq!(validate_quantity(0), Err(ProtocolError::InvalidQuantity));
    }

    #[test]
    fn test_tag_rules() {
        assert_eq!(validate_side(0x01), Ok(Side::Buy));
        assert_eq!(validate_side(0xFF), Ok(Side::Sell));
        assert_eq!(validate_side(0x00), Err(ProtocolError::InvalidSide { tag: 0 }));
        assert_eq!(validate_order_type(2), Ok(OrderType::Stop));
        assert_eq!(
            validate_order_type(9),
            Err(ProtocolError::InvalidOrderType { tag: 9 })
        );
    }
}
