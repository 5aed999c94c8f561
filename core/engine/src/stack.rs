//! FILENAME: core/engine/src/stack.rs
//! PURPOSE: The operand stack shared by the evaluator and the transcoders.
//! CONTEXT: Evaluating postfix and rewriting it into another notation are the
//! same reduction with different leaf/combine steps: literals push a value,
//! operators pop two and push one. Only the value type changes (f64, token
//! fragments, infix text).

use crate::error::{EngineError, EngineResult};
use parser::{Literal, Operator, Token};

pub(crate) struct OperandStack<T> {
    values: Vec<T>,
}

impl<T> OperandStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        OperandStack {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Pops the top two values as `(top, below)`.
    pub fn pop_two(&mut self, operator: Operator, index: usize) -> EngineResult<(T, T)> {
        let top = self.values.pop();
        let below = self.values.pop();
        match (top, below) {
            (Some(top), Some(below)) => Ok((top, below)),
            _ => Err(EngineError::StackUnderflow { operator, index }),
        }
    }

    /// Consumes the stack, which must hold exactly one value.
    pub fn finish(mut self) -> EngineResult<T> {
        match self.values.len() {
            0 => Err(EngineError::EmptyExpression),
            1 => self.values.pop().ok_or(EngineError::EmptyExpression),
            count => Err(EngineError::DanglingOperands { count }),
        }
    }
}

/// Reduces postfix tokens left to right. `combine` receives `(left, right)`.
pub(crate) fn reduce_postfix<T, L, C>(tokens: &[Token], mut leaf: L, mut combine: C) -> EngineResult<T>
where
    L: FnMut(&Literal) -> T,
    C: FnMut(Operator, T, T, usize) -> EngineResult<T>,
{
    let mut stack = OperandStack::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(lit) => stack.push(leaf(lit)),
            Token::Operator(op) => {
                let (right, left) = stack.pop_two(*op, index)?;
                stack.push(combine(*op, left, right, index)?);
            }
            Token::LParen | Token::RParen => return Err(invalid_operator(token, index)),
        }
    }
    stack.finish()
}

/// Reduces prefix tokens right to left. `combine` receives `(left, right)`;
/// `index` is the position in the original left-to-right sequence.
pub(crate) fn reduce_prefix<T, L, C>(tokens: &[Token], mut leaf: L, mut combine: C) -> EngineResult<T>
where
    L: FnMut(&Literal) -> T,
    C: FnMut(Operator, T, T, usize) -> EngineResult<T>,
{
    let mut stack = OperandStack::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::Literal(lit) => stack.push(leaf(lit)),
            Token::Operator(op) => {
                let (left, right) = stack.pop_two(*op, index)?;
                stack.push(combine(*op, left, right, index)?);
            }
            Token::LParen | Token::RParen => return Err(invalid_operator(token, index)),
        }
    }
    stack.finish()
}

fn invalid_operator(token: &Token, index: usize) -> EngineError {
    EngineError::InvalidOperator {
        text: token.to_string(),
        index,
    }
}
