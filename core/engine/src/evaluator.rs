//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Reduces a postfix expression to a single number.
//! CONTEXT: Every notation is normalized to postfix before evaluation, so
//! this is the only place arithmetic happens.
//!
//! OPERATORS:
//! - + - * /  : IEEE-754 arithmetic, left operand first
//! - /        : a right operand of exactly zero (or -0) is an error
//! - ^        : `f64::powf`; NaN and infinities are returned as-is

use crate::error::{EngineError, EngineResult};
use crate::stack::reduce_postfix;
use parser::{tokenize_words, Operator, Token};

/// Evaluates postfix tokens.
pub fn evaluate(tokens: &[Token]) -> EngineResult<f64> {
    let result = reduce_postfix(tokens, |lit| lit.value(), apply)?;
    log::debug!(target: "EVAL", "{} tokens --> {}", tokens.len(), result);
    Ok(result)
}

/// Evaluates space-separated postfix text.
pub fn evaluate_postfix(expression: &str) -> EngineResult<f64> {
    let tokens = tokenize_words(expression)?;
    evaluate(&tokens)
}

/// Applies one binary operator. `index` locates the operator for errors.
pub fn apply(op: Operator, left: f64, right: f64, index: usize) -> EngineResult<f64> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(EngineError::DivisionByZero { index });
            }
            left / right
        }
        Operator::Power => left.powf(right),
    };
    log::trace!(target: "EVAL", "{} {} {} = {}", left, op, right, value);
    Ok(value)
}
