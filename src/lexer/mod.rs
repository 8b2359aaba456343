//! Number lexing module
//!
//! This module finds the numeric spans of a text. The main entry point is
//! [`NumberLexer`], a lazy iterator over [`RawMatch`] values in ascending,
//! non-overlapping order.

mod shapes;

pub use shapes::classify_run;

use crate::types::RawMatch;

/// Iterator over the numeric spans of a text
///
/// A span starts at an ASCII digit that does not continue a word and covers
/// the longest run of digits joined by single dots or commas. Runs glued to a
/// letter on either side (`A4`, `3D`) belong to a word and are skipped.
///
/// The lexer is a pure function of its input; cloning it or creating a new
/// one over the same text restarts the scan.
///
/// # Examples
/// ```
/// use number_simplify::lexer::NumberLexer;
/// use number_simplify::types::LiteralShape;
///
/// let spans: Vec<_> = NumberLexer::new("Am 1. Januar 2024 kamen 5.678 Gäste.").collect();
/// let literals: Vec<&str> = spans.iter().map(|m| m.literal).collect();
/// assert_eq!(literals, vec!["1", "2024", "5.678"]);
/// assert_eq!(spans[2].shape, LiteralShape::Grouped);
/// ```
#[derive(Debug, Clone)]
pub struct NumberLexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> NumberLexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Continue the scan from a byte offset (which must lie on a char boundary)
    pub fn resume_at(&mut self, pos: usize) {
        if pos > self.pos && self.text.is_char_boundary(pos) {
            self.pos = pos;
        }
    }
}

impl<'a> Iterator for NumberLexer<'a> {
    type Item = RawMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let offset = rest.find(|c: char| c.is_ascii_digit())?;
            let start = self.pos + offset;

            let mut input = &self.text[start..];
            let Ok(literal) = shapes::numeric_run(&mut input) else {
                // digit1 cannot fail on a digit; step past it anyway
                self.pos = start + 1;
                continue;
            };
            let end = start + literal.len();
            self.pos = end;

            let glued_before = self.text[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
            let glued_after = self.text[end..]
                .chars()
                .next()
                .is_some_and(char::is_alphabetic);
            if glued_before || glued_after {
                tracing::trace!(literal, start, "skipping number inside a word");
                continue;
            }

            let shape = classify_run(literal);
            tracing::trace!(literal, start, ?shape, "lexed number");
            return Some(RawMatch {
                start,
                end,
                literal,
                shape,
            });
        }
        None
    }
}
