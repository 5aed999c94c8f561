//! FILENAME: core/engine/src/error.rs

use parser::{Operator, ParseError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    #[error("Division by zero at token {index}")]
    DivisionByZero { index: usize },

    #[error("Operator '{operator}' at token {index} is missing an operand")]
    StackUnderflow { operator: Operator, index: usize },

    #[error("Expression leaves {count} values without an operator")]
    DanglingOperands { count: usize },

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Invalid operator '{text}' at token {index}")]
    InvalidOperator { text: String, index: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
