pub mod classifier;
pub mod converter;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod rules;
pub mod simplify;
pub mod types;

// Main API
pub use error::{ConvertError, RulesError};
pub use rules::Rules;
pub use simplify::{Simplifier, simplify_numbers, simplify_numbers_with};
pub use types::*;
