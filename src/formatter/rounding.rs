use crate::rules::Rules;
use crate::types::Decimal;

/// Rounding step for a value: its band's step, or the step keeping the
/// configured number of significant figures above the last band
pub fn rounding_step(value: &Decimal, rules: &Rules) -> u64 {
    let integer = value.integer_part();
    match rules.rounding_bands.iter().find(|band| integer < band.below) {
        Some(band) => band.step,
        None => 10u64.pow(
            value
                .integer_digits()
                .saturating_sub(rules.significant_figures),
        ),
    }
}

/// Round a value to a reader-friendly magnitude, half-up
///
/// With the German rules, values below 100 round to whole numbers, below 1000
/// to hundreds, below 100000 to thousands and larger values keep three
/// significant figures. Returns `None` if the result overflows.
pub fn significant_round(value: &Decimal, rules: &Rules) -> Option<u64> {
    value.round_to_step(rounding_step(value, rules))
}
