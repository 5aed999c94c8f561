//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions shared by every notation.
//! CONTEXT: Tokens are built once, by `tokenize` for infix text or by
//! `tokenize_words` for pre-tokenized postfix/prefix text, and are then
//! consumed by the shunting-yard converter, the evaluator and the transcoders.

use std::fmt;

/// The five binary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_symbol(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Rank used by the shunting-yard converter. Equal ranks pop, so every
    /// operator (including `^`) groups left to right.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A numeric literal: the text as written plus its parsed value.
#[derive(Debug, PartialEq, Clone)]
pub struct Literal {
    text: String,
    value: f64,
}

impl Literal {
    /// Classifies `text`, returning `None` when it is not a numeric literal.
    pub fn parse(text: &str) -> Option<Literal> {
        crate::numeric::parse_literal(text).map(|value| Literal {
            text: text.to_string(),
            value,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens recognized in any of the three notations.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Operator(Operator),
    LParen,
    RParen,
}

impl Token {
    /// Convenience constructor, mostly for tests.
    pub fn number(text: &str) -> Option<Token> {
        Literal::parse(text).map(Token::Literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(lit) => write!(f, "{}", lit),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as single-space-separated text, the canonical
/// form of postfix and prefix expressions.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
