//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the notation parser.
//! CONTEXT: This crate turns expression text into typed tokens and reorders
//! infix tokens into postfix. Evaluation and transcoding live in `engine`.
//!
//! PIPELINE: Infix String --> Lexer --> Lexemes --> Tokens --> Shunting-yard --> Postfix
//!           Postfix/Prefix String --> Word splitter --> Tokens
//!
//! SUPPORTED FEATURES:
//! - Binary operators: +, -, *, /, ^ (all left-associative)
//! - Parentheses for grouping (infix only)
//! - Non-negative decimal literals: 3, 3.5, .5, 3.

pub mod error;
pub mod lexer;
pub mod numeric;
pub mod shunting_yard;
pub mod token;


// Re-export commonly used types for convenience
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, tokenize_words, Lexeme, Lexer};
pub use numeric::{is_numeric, parse_literal};
pub use shunting_yard::{infix_to_postfix, to_postfix};
pub use token::{render, Literal, Operator, Token};
