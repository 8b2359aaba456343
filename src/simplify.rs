//! The text-to-text pipeline
//!
//! Each numeric span found by the lexer is classified, converted and
//! formatted; the text between spans is copied unchanged.

use crate::classifier::{Window, classify};
use crate::converter::convert;
use crate::formatter::format_number;
use crate::lexer::NumberLexer;
use crate::rules::Rules;
use crate::types::{FormattedOutput, NumericValue, RawMatch};

/// Simplify the numbers in a German text using the built-in rules
///
/// Never fails: spans that cannot be converted are kept as written.
///
/// # Examples
/// ```
/// use number_simplify::simplify_numbers;
///
/// assert_eq!(
///     simplify_numbers("324.620,22 Euro wurden gespendet."),
///     "etwa 325.000 Euro wurden gespendet."
/// );
/// assert_eq!(
///     simplify_numbers("25 Prozent der Bevölkerung sind betroffen."),
///     "jeder Vierte der Bevölkerung sind betroffen."
/// );
/// ```
pub fn simplify_numbers(text: &str) -> String {
    simplify_numbers_with(text, Rules::german())
}

/// Simplify the numbers in a text using the given rules
pub fn simplify_numbers_with(text: &str, rules: &Rules) -> String {
    let mut output = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut lexer = NumberLexer::new(text);

    while let Some(raw) = lexer.next() {
        output.push_str(&text[copied_to..raw.start]);

        let window = Window::around(text, &raw);
        let formatted = simplify_span(&raw, &window, rules);
        output.push_str(&formatted.text);
        copied_to = raw.end;

        if formatted.consumes_unit {
            if let Some(unit) = window.next_word() {
                copied_to = raw.end + unit.end;
                lexer.resume_at(copied_to);
            }
        }
    }

    output.push_str(&text[copied_to..]);
    output
}

fn simplify_span(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> FormattedOutput {
    let category = classify(raw, window, rules);
    if category.is_pass_through() {
        return FormattedOutput::new(raw.literal);
    }

    let value = match convert(raw.literal, raw.shape) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(literal = raw.literal, start = raw.start, "keeping number as written: {}", e);
            return FormattedOutput::new(raw.literal);
        }
    };

    let already_approximate = window
        .previous_word()
        .is_some_and(|word| word.eq_ignore_ascii_case(&rules.approximation_marker));

    format_number(
        &NumericValue { value, category },
        raw.literal,
        already_approximate,
        rules,
    )
}

/// Simplifies texts with a fixed set of rules
#[derive(Debug, Clone, Copy)]
pub struct Simplifier<'r> {
    rules: &'r Rules,
}

impl Simplifier<'static> {
    /// A simplifier using the built-in German rules
    pub fn german() -> Self {
        Self::new(Rules::german())
    }
}

impl Default for Simplifier<'static> {
    fn default() -> Self {
        Self::german()
    }
}

impl<'r> Simplifier<'r> {
    pub fn new(rules: &'r Rules) -> Self {
        Self { rules }
    }

    pub fn simplify(&self, text: &str) -> String {
        simplify_numbers_with(text, self.rules)
    }
}
