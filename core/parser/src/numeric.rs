//! FILENAME: core/parser/src/numeric.rs
//! PURPOSE: The single numeric-literal predicate.
//! CONTEXT: Both the infix tokenizer and the postfix/prefix word splitter
//! classify literals here, so a text is a number in one notation exactly
//! when it is a number in the others.
//!
//! ACCEPTED FORMS: optional sign, then `digits`, `digits.`, `digits.digits`
//! or `.digits`. No exponents, no `inf`/`nan`.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("numeric literal pattern is valid")
});

/// Parses `text` as a decimal literal, or returns `None`.
pub fn parse_literal(text: &str) -> Option<f64> {
    if !NUMERIC_LITERAL.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// True iff `text` is a numeric literal.
pub fn is_numeric(text: &str) -> bool {
    parse_literal(text).is_some()
}

/// True if `text` was probably meant as a number: used to pick between
/// `MalformedLiteral` and `InvalidOperator` when classification fails.
pub(crate) fn looks_numeric(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
}
