use crate::rules::Rules;
use crate::types::{Decimal, PercentIdiom};

/// The idiom for a percentage rounded to a whole number, if the table has one
pub fn find_idiom(percent: u64, rules: &Rules) -> Option<&PercentIdiom> {
    rules
        .percent_idioms
        .iter()
        .find(|idiom| idiom.condition.matches(percent as f64))
}

/// Round a percentage half-up to a whole number
pub fn rounded_percent(value: &Decimal) -> Option<u64> {
    value.round_to_step(1)
}
