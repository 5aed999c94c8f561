//! FILENAME: core/parser/src/shunting_yard.rs
//! PURPOSE: Converts infix token sequences to postfix with an operator stack.
//! CONTEXT: Second stage of the infix pipeline. The output is the canonical
//! postfix form every other stage works from.
//!
//! RULES:
//! - literal   --> output
//! - "("       --> push
//! - ")"       --> pop to output until "(", discard the "("
//! - operator  --> pop while top is an operator with precedence >= this one, then push
//! - end       --> pop everything; a leftover "(" is an error

use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::{render, Operator, Token};

/// Entry on the operator stack, remembering where a "(" came from.
enum Pending {
    Open { index: usize },
    Op(Operator),
}

/// Reorders an infix token sequence into postfix order.
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(_) => output.push(token.clone()),

            Token::LParen => stack.push(Pending::Open { index }),

            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Open { .. }) => break,
                    None => return Err(ParseError::UnbalancedParentheses { index }),
                }
            },

            Token::Operator(op) => {
                while let Some(&Pending::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Op(*op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Token::Operator(op)),
            Pending::Open { index } => return Err(ParseError::UnbalancedParentheses { index }),
        }
    }

    log::debug!(target: "SHUNT", "postfix: {}", render(&output));
    Ok(output)
}

/// Converts infix text to space-separated postfix text.
pub fn infix_to_postfix(input: &str) -> ParseResult<String> {
    let tokens = tokenize(input)?;
    let postfix = to_postfix(&tokens)?;
    Ok(render(&postfix))
}
