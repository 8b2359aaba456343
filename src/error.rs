//! Error types
//!
//! None of these reach the caller of [`crate::simplify_numbers`]: a span whose
//! conversion fails is copied unchanged, and broken rule data falls back to the
//! base rules.

use thiserror::Error;

/// Failure to convert a numeric literal into a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The separators of the literal are misplaced (`1,2,3`, `1.23,4`)
    #[error("malformed number literal: '{0}'")]
    MalformedNumberLiteral(String),
    /// The literal has more digits than can be represented exactly
    #[error("number literal out of range: '{0}'")]
    OutOfRange(String),
}

/// Failure to load a rule table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    /// The TOML document could not be parsed
    #[error("error parsing rule data: {0}")]
    Parse(String),
    /// The document parsed but a table holds an unusable value
    #[error("invalid rule data: {0}")]
    Invalid(String),
}
