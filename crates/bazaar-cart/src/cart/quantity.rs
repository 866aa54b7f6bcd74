//! Quantity coercion.
//!
//! Every quantity that enters the cart funnels through this module, so the
//! "at least 1" invariant holds on every mutation path: raw field input,
//! values read back from storage, and increments alike.

/// Minimum quantity for a line item.
pub const MIN_QUANTITY: u32 = 1;

/// Parse raw quantity input, clamping to the line-item floor.
///
/// Non-numeric input and values below 1 coerce to 1; values beyond `u32`
/// saturate. Surrounding whitespace is ignored.
///
/// ```
/// use bazaar_cart::cart::quantity::parse_raw;
///
/// assert_eq!(parse_raw("3"), 3);
/// assert_eq!(parse_raw("-5"), 1);
/// assert_eq!(parse_raw("abc"), 1);
/// ```
pub fn parse_raw(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(q) if q >= i64::from(MIN_QUANTITY) => u32::try_from(q).unwrap_or(u32::MAX),
        _ => MIN_QUANTITY,
    }
}

/// Coerce a stored or computed quantity to the line-item floor.
pub fn or_default(quantity: u32) -> u32 {
    quantity.max(MIN_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_raw("3"), 3);
        assert_eq!(parse_raw("1"), 1);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        assert_eq!(parse_raw(" 7 "), 7);
    }

    #[test]
    fn test_parse_below_floor() {
        assert_eq!(parse_raw("0"), 1);
        assert_eq!(parse_raw("-5"), 1);
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(parse_raw("abc"), 1);
        assert_eq!(parse_raw(""), 1);
        assert_eq!(parse_raw("2.5"), 1);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_raw("99999999999"), u32::MAX);
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(0), 1);
        assert_eq!(or_default(1), 1);
        assert_eq!(or_default(12), 12);
    }
}
