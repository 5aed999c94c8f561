//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,

    #[error("Unbalanced parentheses at token {index}")]
    UnbalancedParentheses { index: usize },

    #[error("Malformed literal '{text}' at offset {offset}")]
    MalformedLiteral { text: String, offset: usize },

    #[error("Invalid operator '{text}' at offset {offset}")]
    InvalidOperator { text: String, offset: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
