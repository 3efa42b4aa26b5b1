use crate::{error::ParseError, interpreter::value::Number};

/// Parses the text of an integer literal, with an optional leading minus.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the value does not fit in an
/// `i64`.
///
/// ## Parameters
/// - `literal`: Decimal digits, optionally preceded by `-`.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use intsub::{interpreter::value::Number, util::num::parse_integer_literal};
///
/// assert_eq!(parse_integer_literal("007", 1).unwrap(), Number(7));
/// assert_eq!(parse_integer_literal("-9223372036854775808", 1).unwrap(), Number(i64::MIN));
/// assert!(parse_integer_literal("9223372036854775808", 1).is_err());
/// ```
pub fn parse_integer_literal(literal: &str, line: usize) -> Result<Number, ParseError> {
    literal.parse::<i64>()
           .map(Number)
           .map_err(|_| ParseError::LiteralTooLarge { literal: literal.to_string(),
                                                      line })
}

/// Divides `a` by `b`, rounding toward negative infinity.
///
/// Unlike `/` on Rust integers, which truncates toward zero, the quotient of
/// operands with different signs is rounded down: `-7 / 2` is `-4`.
///
/// ## Returns
/// - `Some(quotient)` on success.
/// - `None` if `b` is zero or the result overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use intsub::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(-7, -2), Some(3));
/// assert_eq!(checked_floor_div(6, -3), Some(-2));
/// assert_eq!(checked_floor_div(1, 0), None);
/// assert_eq!(checked_floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let Some(quotient) = a.checked_div(b) else {
        return None;
    };
    if a % b != 0 && (a < 0) != (b < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
