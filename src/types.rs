//! Type definitions for the number simplifier
//!
//! This module defines the data model shared by the pipeline stages: the raw
//! spans produced by the lexer, the categories assigned by the classifier, the
//! exact decimal values produced by the converter and the fragments produced
//! by the formatter.

use std::ops::Range;

/// Lexical shape of a numeric run, as recognized by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralShape {
    /// Integer grouped with dots, optionally with one or two fractional digits (324.620,22)
    Grouped,
    /// Ungrouped integer followed by a decimal comma (38,7)
    Decimal,
    /// Digits only, no separators (2024, 25)
    Bare,
    /// Day and month, optionally a year, separated by dots (03.10.2024)
    NumericDate,
    /// A run of digits and separators that fits none of the shapes above (1,2,3)
    Malformed,
}

/// A numeric span found in the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Byte offset of the first character of the span
    pub start: usize,
    /// Byte offset one past the last character of the span
    pub end: usize,
    /// The matched text
    pub literal: &'a str,
    /// Shape assigned by the lexer
    pub shape: LiteralShape,
}

impl RawMatch<'_> {
    /// Byte range of the span in the input text
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Value of a bare integer span, if it is one and fits in a `u32`
    pub fn bare_value(&self) -> Option<u32> {
        match self.shape {
            LiteralShape::Bare => self.literal.parse().ok(),
            _ => None,
        }
    }
}

/// Context category of a numeric span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Part of a calendar date (day, month or year of a date)
    DateComponent,
    /// A calendar year
    Year,
    /// An amount of money
    Currency,
    /// A percentage
    Percentage,
    /// Anything else: a count or a measurement
    PlainCount,
}

impl Category {
    /// Whether spans of this category are copied unchanged
    pub fn is_pass_through(self) -> bool {
        matches!(self, Category::DateComponent | Category::Year)
    }
}

/// An exact non-negative decimal value: `mantissa / 10^scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    /// All digits of the value without the decimal separator
    pub mantissa: u64,
    /// Number of fractional digits
    pub scale: u32,
}

impl Decimal {
    /// An integral value
    pub fn integer(value: u64) -> Self {
        Self {
            mantissa: value,
            scale: 0,
        }
    }

    /// The integer part, truncated
    pub fn integer_part(&self) -> u64 {
        self.mantissa / 10u64.pow(self.scale)
    }

    /// The fractional digits as an integer (`38,7` gives 7)
    pub fn fraction_part(&self) -> u64 {
        self.mantissa % 10u64.pow(self.scale)
    }

    pub fn is_integral(&self) -> bool {
        self.fraction_part() == 0
    }

    /// Number of digits of the integer part (0 has one digit)
    pub fn integer_digits(&self) -> u32 {
        self.integer_part().checked_ilog10().map_or(1, |d| d + 1)
    }

    /// Round half-up to a multiple of `step` (an integral step, at least 1)
    ///
    /// Returns `None` if the result does not fit in a `u64`.
    pub fn round_to_step(&self, step: u64) -> Option<u64> {
        let scaled_step = u128::from(step) * 10u128.pow(self.scale);
        let mantissa = u128::from(self.mantissa);
        let units = (mantissa + scaled_step / 2) / scaled_step;
        u64::try_from(units * u128::from(step)).ok()
    }

    /// Round half-up to at most `digits` fractional digits
    ///
    /// Trailing fractional zeros are dropped from the result.
    pub fn round_to_fraction_digits(&self, digits: u32) -> Option<Decimal> {
        let mut rounded = if self.scale <= digits {
            *self
        } else {
            let divisor = 10u128.pow(self.scale - digits);
            let mantissa = (u128::from(self.mantissa) + divisor / 2) / divisor;
            Decimal {
                mantissa: u64::try_from(mantissa).ok()?,
                scale: digits,
            }
        };
        while rounded.scale > 0 && rounded.mantissa % 10 == 0 {
            rounded.mantissa /= 10;
            rounded.scale -= 1;
        }
        Some(rounded)
    }

    /// Compare two values numerically, independent of their scale
    pub fn numerically_eq(&self, other: &Decimal) -> bool {
        let scale = self.scale.max(other.scale);
        let lhs = u128::from(self.mantissa) * 10u128.pow(scale - self.scale);
        let rhs = u128::from(other.mantissa) * 10u128.pow(scale - other.scale);
        lhs == rhs
    }
}

/// A converted value together with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericValue {
    pub value: Decimal,
    pub category: Category,
}

/// The text replacing a span in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// Replacement text
    pub text: String,
    /// Whether the unit word following the span is replaced as well
    pub consumes_unit: bool,
}

impl FormattedOutput {
    /// A fragment that leaves the following text alone
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            consumes_unit: false,
        }
    }

    /// A fragment that also stands in for the following unit word
    pub fn replacing_unit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            consumes_unit: true,
        }
    }
}

/// Comparison operators for idiom conditions
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOperator {
    /// Equal to (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal to (>=)
    Ge,
    /// Less than or equal to (<=)
    Le,
    /// Not equal to (<>)
    Ne,
}

/// Represents a condition with an operator and a comparison value
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The comparison operator
    pub operator: ComparisonOperator,
    /// The value to compare against
    pub value: f64,
}

impl Condition {
    /// Checks whether `value` satisfies the condition
    pub fn matches(&self, value: f64) -> bool {
        match self.operator {
            ComparisonOperator::Eq => value == self.value,
            ComparisonOperator::Gt => value > self.value,
            ComparisonOperator::Lt => value < self.value,
            ComparisonOperator::Ge => value >= self.value,
            ComparisonOperator::Le => value <= self.value,
            ComparisonOperator::Ne => value != self.value,
        }
    }
}

/// One row of the percentage idiom table
#[derive(Debug, Clone, PartialEq)]
pub struct PercentIdiom {
    /// Condition on the rounded percentage
    pub condition: Condition,
    /// Phrase replacing the percentage and its unit word
    pub phrase: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_parts() {
        let value = Decimal {
            mantissa: 32462022,
            scale: 2,
        };
        assert_eq!(value.integer_part(), 324620);
        assert_eq!(value.fraction_part(), 22);
        assert_eq!(value.integer_digits(), 6);
        assert!(!value.is_integral());
        assert_eq!(Decimal::integer(0).integer_digits(), 1);
    }

    #[test]
    fn test_round_to_step_half_up() {
        assert_eq!(Decimal::integer(1500).round_to_step(1000), Some(2000));
        assert_eq!(Decimal::integer(1499).round_to_step(1000), Some(1000));
        let value = Decimal {
            mantissa: 245,
            scale: 1,
        };
        assert_eq!(value.round_to_step(1), Some(25));
    }

    #[test]
    fn test_round_to_fraction_digits() {
        let value = Decimal {
            mantissa: 457,
            scale: 2,
        };
        assert_eq!(
            value.round_to_fraction_digits(1),
            Some(Decimal {
                mantissa: 46,
                scale: 1
            })
        );
        let whole = Decimal {
            mantissa: 9996,
            scale: 1,
        };
        assert_eq!(
            whole.round_to_fraction_digits(0),
            Some(Decimal::integer(1000))
        );
    }

    #[test]
    fn test_condition_matches() {
        let condition = Condition {
            operator: ComparisonOperator::Ge,
            value: 90.0,
        };
        assert!(condition.matches(90.0));
        assert!(!condition.matches(89.0));
    }
}
