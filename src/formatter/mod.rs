//! Number formatting module
//!
//! Maps a converted value and its category to the text that replaces the
//! span: years and dates stay as written, amounts and counts are rounded and
//! re-grouped, percentages become idioms where one fits. The main entry point
//! is the `format_number` function.

mod grouping;
mod percent;
mod rounding;

pub use grouping::{group_digits, render_decimal};
pub use percent::{find_idiom, rounded_percent};
pub use rounding::{rounding_step, significant_round};

use crate::rules::Rules;
use crate::types::{Category, Decimal, FormattedOutput, NumericValue};

/// Format a value according to its category
///
/// # Arguments
/// * `number` - The converted value and its category
/// * `literal` - The span as written in the input
/// * `already_approximate` - Whether the text before the span already carries the approximation marker
/// * `rules` - Rule tables
///
/// # Returns
/// * `FormattedOutput` - The replacement text; the literal itself when nothing changes
///
/// # Examples
/// ```
/// use number_simplify::formatter::format_number;
/// use number_simplify::rules::Rules;
/// use number_simplify::types::{Category, Decimal, NumericValue};
///
/// let number = NumericValue {
///     value: Decimal { mantissa: 32462022, scale: 2 },
///     category: Category::Currency,
/// };
/// let output = format_number(&number, "324.620,22", false, Rules::german());
/// assert_eq!(output.text, "etwa 325.000");
/// ```
pub fn format_number(
    number: &NumericValue,
    literal: &str,
    already_approximate: bool,
    rules: &Rules,
) -> FormattedOutput {
    let formatted = match number.category {
        Category::DateComponent | Category::Year => None,
        Category::Currency => format_currency(&number.value, already_approximate, rules),
        Category::PlainCount => format_count(&number.value, literal, already_approximate, rules),
        Category::Percentage => {
            format_percentage(&number.value, literal, already_approximate, rules)
        }
    };

    formatted.unwrap_or_else(|| FormattedOutput::new(literal))
}

fn approximately(text: String, already_approximate: bool, rules: &Rules) -> FormattedOutput {
    if already_approximate || rules.approximation_marker.is_empty() {
        FormattedOutput::new(text)
    } else {
        FormattedOutput::new(format!("{} {}", rules.approximation_marker, text))
    }
}

fn format_currency(
    value: &Decimal,
    already_approximate: bool,
    rules: &Rules,
) -> Option<FormattedOutput> {
    let rounded = significant_round(value, rules)?;
    let text = render_decimal(&Decimal::integer(rounded), rules);
    Some(approximately(text, already_approximate, rules))
}

fn format_count(
    value: &Decimal,
    literal: &str,
    already_approximate: bool,
    rules: &Rules,
) -> Option<FormattedOutput> {
    if value.integer_part() >= rules.grouping_threshold {
        let rounded = significant_round(value, rules)?;
        let text = render_decimal(&Decimal::integer(rounded), rules);
        return Some(approximately(text, already_approximate, rules));
    }

    // below the threshold only the reporting precision is enforced
    let rounded = value.round_to_fraction_digits(rules.reporting_fraction_digits)?;
    if rounded.numerically_eq(value) {
        return Some(FormattedOutput::new(literal));
    }
    Some(approximately(
        render_decimal(&rounded, rules),
        already_approximate,
        rules,
    ))
}

fn format_percentage(
    value: &Decimal,
    literal: &str,
    already_approximate: bool,
    rules: &Rules,
) -> Option<FormattedOutput> {
    let percent = rounded_percent(value)?;

    // idioms read wrong after the marker ("etwa jeder Vierte")
    if !already_approximate {
        if let Some(idiom) = find_idiom(percent, rules) {
            return Some(FormattedOutput::replacing_unit(idiom.phrase.clone()));
        }
    }

    if value.is_integral() {
        Some(FormattedOutput::new(literal))
    } else {
        Some(approximately(
            percent.to_string(),
            already_approximate,
            rules,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(mantissa: u64, scale: u32, category: Category, literal: &str) -> FormattedOutput {
        let number = NumericValue {
            value: Decimal { mantissa, scale },
            category,
        };
        format_number(&number, literal, false, Rules::german())
    }

    #[test]
    fn test_pass_through_categories() {
        assert_eq!(
            format(2024, 0, Category::Year, "2024"),
            FormattedOutput::new("2024")
        );
        assert_eq!(
            format(1, 0, Category::DateComponent, "1"),
            FormattedOutput::new("1")
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!(
            format(32462022, 2, Category::Currency, "324.620,22").text,
            "etwa 325.000"
        );
        assert_eq!(format(457, 2, Category::Currency, "4,57").text, "etwa 5");
        assert_eq!(format(500, 0, Category::Currency, "500").text, "etwa 500");
    }

    #[test]
    fn test_large_counts() {
        assert_eq!(format(1897, 0, Category::PlainCount, "1.897").text, "etwa 2.000");
        assert_eq!(format(1234, 0, Category::PlainCount, "1.234").text, "etwa 1.000");
        assert_eq!(format(2018, 0, Category::PlainCount, "2018").text, "etwa 2.000");
        assert_eq!(format(2000, 0, Category::PlainCount, "2.000").text, "etwa 2.000");
    }

    #[test]
    fn test_small_counts() {
        assert_eq!(
            format(387, 1, Category::PlainCount, "38,7"),
            FormattedOutput::new("38,7")
        );
        assert_eq!(
            format(345, 0, Category::PlainCount, "345"),
            FormattedOutput::new("345")
        );
        assert_eq!(format(457, 2, Category::PlainCount, "4,57").text, "etwa 4,6");
        assert_eq!(format(450, 2, Category::PlainCount, "4,50").text, "4,50");
        assert_eq!(format(99996, 2, Category::PlainCount, "999,96").text, "etwa 1.000");
    }

    #[test]
    fn test_percentages() {
        let idiom = format(25, 0, Category::Percentage, "25");
        assert_eq!(idiom, FormattedOutput::replacing_unit("jeder Vierte"));
        assert_eq!(format(457, 2, Category::Percentage, "4,57").text, "wenige");
        assert_eq!(
            format(33, 0, Category::Percentage, "33"),
            FormattedOutput::new("33")
        );
        assert_eq!(
            format(334, 1, Category::Percentage, "33,4"),
            FormattedOutput::new("etwa 33")
        );
    }

    #[test]
    fn test_no_idiom_after_marker() {
        let number = NumericValue {
            value: Decimal::integer(25),
            category: Category::Percentage,
        };
        assert_eq!(
            format_number(&number, "25", true, Rules::german()),
            FormattedOutput::new("25")
        );
        let number = NumericValue {
            value: Decimal {
                mantissa: 254,
                scale: 1,
            },
            category: Category::Percentage,
        };
        assert_eq!(
            format_number(&number, "25,4", true, Rules::german()),
            FormattedOutput::new("25")
        );
    }

    #[test]
    fn test_marker_is_not_repeated() {
        let number = NumericValue {
            value: Decimal::integer(2000),
            category: Category::PlainCount,
        };
        assert_eq!(
            format_number(&number, "2.000", true, Rules::german()).text,
            "2.000"
        );
    }
}
