use winnow::ascii::{float, space0};
use winnow::combinator::{alt, delimited};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::error::RulesError;
use crate::types::{ComparisonOperator, Condition};

/// Parse a comparison operator
fn parse_comparison_operator(input: &mut &str) -> ModalResult<ComparisonOperator> {
    alt((
        literal("<=").value(ComparisonOperator::Le),
        literal(">=").value(ComparisonOperator::Ge),
        literal("<>").value(ComparisonOperator::Ne),
        literal("=").value(ComparisonOperator::Eq),
        literal("<").value(ComparisonOperator::Lt),
        literal(">").value(ComparisonOperator::Gt),
    ))
    .parse_next(input)
}

/// Parse a condition value (a floating point number)
fn parse_condition_value(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Parse a condition such as `>=90`, allowing blanks around the parts
fn parse_condition(input: &mut &str) -> ModalResult<Condition> {
    (
        delimited(space0, parse_comparison_operator, space0),
        parse_condition_value,
        space0,
    )
        .map(|(operator, value, _)| Condition { operator, value })
        .parse_next(input)
}

/// Parse an idiom condition from its text form
///
/// # Examples
/// ```
/// use number_simplify::rules::parse_condition_str;
/// use number_simplify::types::ComparisonOperator;
///
/// let condition = parse_condition_str(">=90").unwrap();
/// assert_eq!(condition.operator, ComparisonOperator::Ge);
/// assert_eq!(condition.value, 90.0);
/// ```
pub fn parse_condition_str(input_str: &str) -> Result<Condition, RulesError> {
    parse_condition
        .parse(input_str)
        .map_err(|e| RulesError::Invalid(format!("Invalid condition '{input_str}': {e}")))
}
