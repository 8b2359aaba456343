//! Number conversion module
//!
//! Turns a literal in German notation (dot as thousands separator, comma as
//! decimal separator) into an exact [`Decimal`].

use crate::error::ConvertError;
use crate::rules::{DECIMAL_SEPARATOR, THOUSANDS_SEPARATOR};
use crate::types::{Decimal, LiteralShape};

/// Largest number of fractional digits a value may carry
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// Convert a numeric literal of the given shape
///
/// Dots are dropped as thousands separators and a comma marks the decimal
/// point. Literals with misplaced separators are rejected instead of guessed,
/// and so are the shapes that do not denote a single number.
///
/// # Examples
/// ```
/// use number_simplify::converter::convert;
/// use number_simplify::types::{Decimal, LiteralShape};
///
/// let value = convert("324.620,22", LiteralShape::Grouped).unwrap();
/// assert_eq!(value, Decimal { mantissa: 32462022, scale: 2 });
/// assert!(convert("1,2,3", LiteralShape::Malformed).is_err());
/// ```
pub fn convert(literal: &str, shape: LiteralShape) -> Result<Decimal, ConvertError> {
    let malformed = || ConvertError::MalformedNumberLiteral(literal.to_string());

    if matches!(shape, LiteralShape::NumericDate | LiteralShape::Malformed) {
        return Err(malformed());
    }

    let (integer_part, fraction_part) = match literal.split_once(DECIMAL_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (literal, None),
    };

    if let Some(fraction) = fraction_part {
        // a second comma, or a dot after the comma
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
    }
    if !valid_grouping(integer_part) {
        return Err(malformed());
    }

    let fraction = fraction_part.unwrap_or("");
    let scale = u32::try_from(fraction.len()).map_err(|_| malformed())?;
    if scale > MAX_FRACTION_DIGITS {
        return Err(ConvertError::OutOfRange(literal.to_string()));
    }

    let mut mantissa: u64 = 0;
    for digit in integer_part
        .bytes()
        .filter(|b| char::from(*b) != THOUSANDS_SEPARATOR)
        .chain(fraction.bytes())
    {
        mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(digit - b'0')))
            .ok_or_else(|| ConvertError::OutOfRange(literal.to_string()))?;
    }

    Ok(Decimal { mantissa, scale })
}

/// Digits, optionally grouped in threes by dots after a leading group of one to three
fn valid_grouping(integer_part: &str) -> bool {
    let mut groups = integer_part.split(THOUSANDS_SEPARATOR);
    let Some(first) = groups.next() else {
        return false;
    };
    if first.is_empty() || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut grouped = false;
    for group in groups {
        grouped = true;
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    !grouped || first.len() <= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(
            convert("1.897", LiteralShape::Grouped),
            Ok(Decimal::integer(1897))
        );
        assert_eq!(
            convert("2024", LiteralShape::Bare),
            Ok(Decimal::integer(2024))
        );
        assert_eq!(
            convert("1.000.000", LiteralShape::Grouped),
            Ok(Decimal::integer(1_000_000))
        );
    }

    #[test]
    fn test_fractions() {
        assert_eq!(
            convert("38,7", LiteralShape::Decimal),
            Ok(Decimal {
                mantissa: 387,
                scale: 1
            })
        );
        assert_eq!(
            convert("4,57", LiteralShape::Decimal),
            Ok(Decimal {
                mantissa: 457,
                scale: 2
            })
        );
    }

    #[test]
    fn test_misplaced_separators() {
        for literal in ["1,2,3", "1,5.000", "12.34", "1234.567", "1.23,4"] {
            assert_eq!(
                convert(literal, LiteralShape::Grouped),
                Err(ConvertError::MalformedNumberLiteral(literal.to_string())),
                "{literal}"
            );
        }
    }

    #[test]
    fn test_non_number_shapes_are_rejected() {
        assert!(matches!(
            convert("03.10.2024", LiteralShape::NumericDate),
            Err(ConvertError::MalformedNumberLiteral(_))
        ));
        assert!(matches!(
            convert("1,2,3", LiteralShape::Malformed),
            Err(ConvertError::MalformedNumberLiteral(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            convert("123456789012345678901234", LiteralShape::Bare),
            Err(ConvertError::OutOfRange(_))
        ));
        assert!(matches!(
            convert("0,0000000000000000001", LiteralShape::Decimal),
            Err(ConvertError::OutOfRange(_))
        ));
    }
}
