//! Context classification module
//!
//! Decides which [`Category`] a numeric span belongs to by looking at the
//! words around it. The decision is an ordered rule table: the first rule
//! that applies wins, and a span no rule claims is a plain count.

mod window;

pub use window::{WINDOW_CHARS, Window, WindowWord};

use chrono::NaiveDate;

use crate::rules::Rules;
use crate::types::{Category, LiteralShape, RawMatch};

/// Leap year used to check day-month pairs without a year
const LEAP_YEAR: i32 = 2000;

/// A single classification rule
pub struct ClassificationRule {
    /// Short name, used in traces
    pub name: &'static str,
    /// Category assigned when the rule applies
    pub category: Category,
    /// Predicate over the span, its window and the rule tables
    pub applies: fn(&RawMatch<'_>, &Window<'_>, &Rules) -> bool,
}

/// Classification rules in precedence order
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "numeric date",
        category: Category::DateComponent,
        applies: is_numeric_date,
    },
    ClassificationRule {
        name: "day of month",
        category: Category::DateComponent,
        applies: is_day_of_month,
    },
    ClassificationRule {
        name: "day after date preposition",
        category: Category::DateComponent,
        applies: is_day_after_preposition,
    },
    ClassificationRule {
        name: "year after month name",
        category: Category::DateComponent,
        applies: follows_month_name,
    },
    ClassificationRule {
        name: "year marker",
        category: Category::Year,
        applies: follows_year_marker,
    },
    ClassificationRule {
        name: "year range",
        category: Category::Year,
        applies: is_in_year_range,
    },
    ClassificationRule {
        name: "currency unit",
        category: Category::Currency,
        applies: precedes_currency,
    },
    ClassificationRule {
        name: "percent unit",
        category: Category::Percentage,
        applies: precedes_percent,
    },
];

/// Classify a numeric span
///
/// # Examples
/// ```
/// use number_simplify::classifier::{Window, classify};
/// use number_simplify::lexer::NumberLexer;
/// use number_simplify::rules::Rules;
/// use number_simplify::types::Category;
///
/// let text = "Im Jahr 2025 gab es 2018 Ereignisse";
/// let categories: Vec<Category> = NumberLexer::new(text)
///     .map(|raw| classify(&raw, &Window::around(text, &raw), Rules::german()))
///     .collect();
/// assert_eq!(categories, vec![Category::Year, Category::PlainCount]);
/// ```
pub fn classify(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> Category {
    match CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.applies)(raw, window, rules))
    {
        Some(rule) => {
            tracing::trace!(literal = raw.literal, rule = rule.name, category = ?rule.category, "classified number");
            rule.category
        }
        None => {
            tracing::trace!(literal = raw.literal, "no rule applies, treating as plain count");
            Category::PlainCount
        }
    }
}

/// Whether a value in the year range is really a count
///
/// True when `value` could be a year but the word after it is a unit: a
/// count noun ("2018 Ereignisse"), a currency or a percent token.
pub fn is_year_like_count(value: u32, trailing_word: Option<&str>, rules: &Rules) -> bool {
    rules.year_range.contains(&value) && trailing_word.is_some_and(|word| is_unit_word(word, rules))
}

fn is_unit_word(word: &str, rules: &Rules) -> bool {
    contains_word(&rules.count_nouns, word)
        || contains_word(&rules.currency_tokens, word)
        || contains_word(&rules.percent_tokens, word)
}

fn contains_word(list: &[String], word: &str) -> bool {
    let word = word.to_lowercase();
    list.iter().any(|entry| entry.to_lowercase() == word)
}

/// 1-based month number of a month name or abbreviation
fn month_number(word: &str, rules: &Rules) -> Option<u32> {
    let word = word.to_lowercase();
    rules
        .month_names
        .iter()
        .position(|name| name.to_lowercase() == word)
        .or_else(|| {
            rules
                .month_abbreviations
                .iter()
                .position(|abbr| abbr.to_lowercase() == word)
        })
        .and_then(|i| u32::try_from(i + 1).ok())
}

fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

fn is_numeric_date(raw: &RawMatch<'_>, _window: &Window<'_>, _rules: &Rules) -> bool {
    if raw.shape != LiteralShape::NumericDate {
        return false;
    }

    let mut parts = raw.literal.split('.');
    let day = parts.next().and_then(|p| p.parse::<u32>().ok());
    let month = parts.next().and_then(|p| p.parse::<u32>().ok());
    let year = match parts.next() {
        Some(p) if p.len() == 2 => p.parse::<i32>().ok().map(|y| 2000 + y),
        Some(p) => p.parse::<i32>().ok(),
        None => Some(LEAP_YEAR),
    };

    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => is_valid_date(year, month, day),
        _ => false,
    }
}

fn is_day_of_month(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    let Some(day) = raw.bare_value() else {
        return false;
    };
    window
        .word_after_period()
        .and_then(|word| month_number(word.text, rules))
        .is_some_and(|month| is_valid_date(LEAP_YEAR, month, day))
}

/// "am 3." or "vom 1. bis": an ordinal day without a month name
///
/// Days followed by a month name are left to the day-of-month rule, which
/// checks that the day exists in that month.
fn is_day_after_preposition(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    raw.bare_value().is_some_and(|day| (1..=31).contains(&day))
        && window.followed_by_period()
        && window
            .word_after_period()
            .is_none_or(|word| month_number(word.text, rules).is_none())
        && window
            .previous_word()
            .is_some_and(|word| contains_word(&rules.date_prepositions, word))
}

/// "Januar 2024": a year completing a date
///
/// Only values in the year range qualify, and not when a unit word follows
/// ("im Juni 4500 Euro", "im Mai 2018 Ereignisse").
fn follows_month_name(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    let Some(value) = raw.bare_value() else {
        return false;
    };
    let trailing_word = window.next_word().map(|word| word.text);
    rules.year_range.contains(&value)
        && !is_year_like_count(value, trailing_word, rules)
        && window
            .previous_word()
            .or_else(|| window.previous_abbreviation())
            .is_some_and(|word| month_number(word, rules).is_some())
}

fn follows_year_marker(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    raw.bare_value().is_some()
        && window
            .previous_word()
            .is_some_and(|word| contains_word(&rules.year_markers, word))
}

fn is_in_year_range(raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    let Some(value) = raw.bare_value() else {
        return false;
    };
    let trailing_word = window.next_word().map(|word| word.text);
    rules.year_range.contains(&value) && !is_year_like_count(value, trailing_word, rules)
}

fn precedes_currency(_raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    window
        .next_word()
        .is_some_and(|word| contains_word(&rules.currency_tokens, word.text))
}

fn precedes_percent(_raw: &RawMatch<'_>, window: &Window<'_>, rules: &Rules) -> bool {
    window
        .next_word()
        .is_some_and(|word| contains_word(&rules.percent_tokens, word.text))
}
