use crate::rules::{DECIMAL_SEPARATOR, Rules, THOUSANDS_SEPARATOR};
use crate::types::Decimal;

/// Render an integer with a separator every three digits from the right
pub fn group_digits(value: u64, separator: char) -> String {
    let int_digits: Vec<char> = value.to_string().chars().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(int_digits.len() + (int_digits.len() - 1) / 3);
    for (count, digit) in int_digits.iter().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    grouped.into_iter().collect()
}

/// Render a value in German notation
///
/// The integer part is grouped from the grouping threshold on; fractional
/// digits follow the decimal separator as stored.
pub fn render_decimal(value: &Decimal, rules: &Rules) -> String {
    let integer = value.integer_part();
    let mut rendered = if integer >= rules.grouping_threshold {
        group_digits(integer, THOUSANDS_SEPARATOR)
    } else {
        integer.to_string()
    };

    if value.scale > 0 {
        rendered.push(DECIMAL_SEPARATOR);
        let width = value.scale as usize;
        rendered.push_str(&format!("{:0width$}", value.fraction_part()));
    }
    rendered
}
