//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans raw expression text and produces tokens.
//! CONTEXT: First stage of the pipeline. Infix text goes through `Lexer`,
//! which needs no separators between numbers and operators. Postfix and
//! prefix text is pre-tokenized: words are separated by whitespace and go
//! through `tokenize_words`.
//!
//! DELIMITERS: ( ) + - * / ^
//! Every other non-whitespace character extends the current literal run, so
//! the lexer itself never fails; classification in `tokenize` does.

use crate::error::{ParseError, ParseResult};
use crate::numeric;
use crate::token::{Literal, Operator, Token};
use std::iter::Peekable;
use std::str::CharIndices;

/// A raw slice of the input: one delimiter character or one maximal literal run.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the input.
    pub offset: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            input: source.char_indices().peekable(),
        }
    }

    /// Advances the lexer and returns the next lexeme, or `None` at end of input.
    pub fn next_lexeme(&mut self) -> Option<Lexeme<'a>> {
        self.skip_whitespace();

        let (start, ch) = self.input.next()?;
        if is_delimiter(ch) {
            return Some(Lexeme {
                text: &self.source[start..start + ch.len_utf8()],
                offset: start,
            });
        }
        Some(self.read_literal_run(start, ch))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Consumes characters up to the next delimiter, whitespace or end of input.
    fn read_literal_run(&mut self, start: usize, first: char) -> Lexeme<'a> {
        let mut end = start + first.len_utf8();
        while let Some(&(idx, ch)) = self.input.peek() {
            if ch.is_whitespace() || is_delimiter(ch) {
                break;
            }
            end = idx + ch.len_utf8();
            self.input.next();
        }
        Lexeme {
            text: &self.source[start..end],
            offset: start,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, '(' | ')') || Operator::from_symbol(ch).is_some()
}

/// Tokenizes infix text.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let tokens = Lexer::new(input)
        .map(classify_lexeme)
        .collect::<ParseResult<Vec<_>>>()?;
    log::trace!(target: "LEXER", "tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

fn classify_lexeme(lexeme: Lexeme<'_>) -> ParseResult<Token> {
    match single_char(lexeme.text) {
        Some('(') => return Ok(Token::LParen),
        Some(')') => return Ok(Token::RParen),
        Some(ch) => {
            if let Some(op) = Operator::from_symbol(ch) {
                return Ok(Token::Operator(op));
            }
        }
        None => {}
    }
    Literal::parse(lexeme.text)
        .map(Token::Literal)
        .ok_or_else(|| ParseError::MalformedLiteral {
            text: lexeme.text.to_string(),
            offset: lexeme.offset,
        })
}

/// Tokenizes whitespace-separated postfix or prefix text.
/// Parentheses have no meaning here and are rejected as operators.
pub fn tokenize_words(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    for (offset, word) in split_words(input) {
        if let Some(op) = single_char(word).and_then(Operator::from_symbol) {
            tokens.push(Token::Operator(op));
        } else if let Some(lit) = Literal::parse(word) {
            tokens.push(Token::Literal(lit));
        } else if numeric::looks_numeric(word) {
            return Err(ParseError::MalformedLiteral {
                text: word.to_string(),
                offset,
            });
        } else {
            return Err(ParseError::InvalidOperator {
                text: word.to_string(),
                offset,
            });
        }
    }
    log::trace!(target: "LEXER", "split {:?} into {} words", input, tokens.len());
    Ok(tokens)
}

/// Whitespace-separated words with their byte offsets.
fn split_words(input: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (idx, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &input[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        words.push((s, &input[s..]));
    }
    words
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
