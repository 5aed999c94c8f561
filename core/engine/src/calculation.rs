//! FILENAME: core/engine/src/calculation.rs
//! PURPOSE: The `calculate` entry point.
//! CONTEXT: Normalizes any notation to postfix tokens, derives the other two
//! forms from them and evaluates. No recovery happens here: every parse,
//! structure or arithmetic error goes straight back to the caller.

use crate::error::EngineResult;
use crate::evaluator::evaluate;
use crate::notation::Notation;
use crate::transcode::{infix_of, postfix_of, prefix_of};
use parser::{render, to_postfix, tokenize, tokenize_words};
use serde::{Deserialize, Serialize};

/// The evaluated result together with all three forms of the expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Notation the input was written in
    pub notation: Notation,
    pub result: f64,
    /// Fully parenthesized below the root
    pub infix: String,
    pub postfix: String,
    pub prefix: String,
}

impl Calculation {
    /// The classic `(result, second form, prefix)` triple. The middle element
    /// is the postfix form for infix input and the infix form otherwise.
    pub fn triple(&self) -> (f64, &str, &str) {
        match self.notation {
            Notation::Infix => (self.result, &self.postfix, &self.prefix),
            Notation::Postfix | Notation::Prefix => (self.result, &self.infix, &self.prefix),
        }
    }
}

/// Calculates `expression` written in the notation named by `tag`.
pub fn calculate(expression: &str, tag: &str) -> EngineResult<Calculation> {
    let notation = tag.parse::<Notation>()?;
    calculate_with(expression, notation)
}

/// Calculates `expression` written in `notation`.
pub fn calculate_with(expression: &str, notation: Notation) -> EngineResult<Calculation> {
    let source = expression.trim();
    log::debug!(target: "CALC", "ENTER calculate notation={} expr={:?}", notation, source);

    let calculation = match notation {
        Notation::Infix => {
            let postfix = to_postfix(&tokenize(source)?)?;
            let prefix = prefix_of(&postfix)?;
            let result = evaluate(&postfix)?;
            Calculation {
                notation,
                result,
                infix: infix_of(&postfix)?,
                postfix: render(&postfix),
                prefix: render(&prefix),
            }
        }
        Notation::Postfix => {
            let postfix = tokenize_words(source)?;
            let prefix = prefix_of(&postfix)?;
            let infix = infix_of(&postfix)?;
            let result = evaluate(&postfix)?;
            Calculation {
                notation,
                result,
                infix,
                postfix: source.to_string(),
                prefix: render(&prefix),
            }
        }
        Notation::Prefix => {
            let postfix = postfix_of(&tokenize_words(source)?)?;
            let infix = infix_of(&postfix)?;
            let result = evaluate(&postfix)?;
            Calculation {
                notation,
                result,
                infix,
                postfix: render(&postfix),
                prefix: source.to_string(),
            }
        }
    };

    log::debug!(target: "CALC", "EXIT calculate result={}", calculation.result);
    Ok(calculation)
}
