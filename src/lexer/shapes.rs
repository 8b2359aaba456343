use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, repeat};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::rules::{DECIMAL_SEPARATOR, THOUSANDS_SEPARATOR};
use crate::types::LiteralShape;

/// Parse a numeric run: digits, optionally joined by single dots or commas
///
/// A separator not followed by a digit is left in the input.
pub fn numeric_run<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        digit1,
        repeat(0.., (one_of([THOUSANDS_SEPARATOR, DECIMAL_SEPARATOR]), digit1)).map(|()| ()),
    )
        .take()
        .parse_next(input)
}

fn digits<'s>(min: usize, max: usize) -> impl FnMut(&mut &'s str) -> ModalResult<&'s str> {
    move |input: &mut &'s str| take_while(min..=max, '0'..='9').parse_next(input)
}

fn fraction<'s>(max_digits: usize) -> impl FnMut(&mut &'s str) -> ModalResult<&'s str> {
    move |input: &mut &'s str| (DECIMAL_SEPARATOR, digits(1, max_digits)).take().parse_next(input)
}

/// 324.620 or 324.620,22
pub fn grouped_integer(input: &mut &str) -> ModalResult<()> {
    (
        digits(1, 3),
        repeat(1.., (THOUSANDS_SEPARATOR, digits(3, 3))).map(|()| ()),
        opt(fraction(2)),
    )
        .void()
        .parse_next(input)
}

/// 38,7
pub fn decimal_with_comma(input: &mut &str) -> ModalResult<()> {
    (digit1, DECIMAL_SEPARATOR, digit1).void().parse_next(input)
}

/// 2024
pub fn bare_integer(input: &mut &str) -> ModalResult<()> {
    digit1.void().parse_next(input)
}

/// 03.10.2024, 3.10.24 or 24.12
pub fn numeric_date(input: &mut &str) -> ModalResult<()> {
    (
        digits(1, 2),
        '.',
        digits(1, 2),
        opt(('.', alt((digits(4, 4), digits(2, 2))))),
    )
        .void()
        .parse_next(input)
}

/// Determine the shape of a whole numeric run
///
/// A shape only applies when its parser consumes the entire run; the shapes
/// are tried from the most specific to the least specific.
pub fn classify_run(run: &str) -> LiteralShape {
    if grouped_integer.parse(run).is_ok() {
        LiteralShape::Grouped
    } else if decimal_with_comma.parse(run).is_ok() {
        LiteralShape::Decimal
    } else if bare_integer.parse(run).is_ok() {
        LiteralShape::Bare
    } else if numeric_date.parse(run).is_ok() {
        LiteralShape::NumericDate
    } else {
        LiteralShape::Malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_run_stops_at_trailing_separator() {
        let mut input = "1.897. Danach";
        assert_eq!(numeric_run(&mut input).unwrap(), "1.897");
        assert_eq!(input, ". Danach");

        let mut input = "38,7 Grad";
        assert_eq!(numeric_run(&mut input).unwrap(), "38,7");
        assert_eq!(input, " Grad");
    }

    #[test]
    fn test_numeric_run_requires_digit() {
        let mut input = ".5";
        assert!(numeric_run(&mut input).is_err());
    }

    #[test]
    fn test_shapes() {
        assert_eq!(classify_run("324.620"), LiteralShape::Grouped);
        assert_eq!(classify_run("324.620,22"), LiteralShape::Grouped);
        assert_eq!(classify_run("1.000.000"), LiteralShape::Grouped);
        assert_eq!(classify_run("38,7"), LiteralShape::Decimal);
        assert_eq!(classify_run("4,57"), LiteralShape::Decimal);
        assert_eq!(classify_run("2024"), LiteralShape::Bare);
        assert_eq!(classify_run("7"), LiteralShape::Bare);
        assert_eq!(classify_run("03.10.2024"), LiteralShape::NumericDate);
        assert_eq!(classify_run("3.10.24"), LiteralShape::NumericDate);
        assert_eq!(classify_run("24.12"), LiteralShape::NumericDate);
    }

    #[test]
    fn test_malformed_runs() {
        assert_eq!(classify_run("1,2,3"), LiteralShape::Malformed);
        assert_eq!(classify_run("1.23,4"), LiteralShape::Malformed);
        assert_eq!(classify_run("12.3456"), LiteralShape::Malformed);
        assert_eq!(classify_run("324.620,225"), LiteralShape::Malformed);
        assert_eq!(classify_run("1,5.000"), LiteralShape::Malformed);
    }
}
