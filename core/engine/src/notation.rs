//! FILENAME: core/engine/src/notation.rs
//! PURPOSE: The notation tag selecting how `calculate` reads its input.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Operator between operands: `(3 + 4) * 5`
    Infix,
    /// Operator after operands (RPN): `3 4 + 5 *`
    Postfix,
    /// Operator before operands (Polish): `* + 3 4 5`
    Prefix,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Postfix, Notation::Prefix];

    pub fn name(self) -> &'static str {
        match self {
            Notation::Infix => "infix",
            Notation::Postfix => "postfix",
            Notation::Prefix => "prefix",
        }
    }

    /// A sample expression in this notation; all three denote the same value.
    pub fn example(self) -> &'static str {
        match self {
            Notation::Infix => "(3 + 4) * 5",
            Notation::Postfix => "3 4 + 5 *",
            Notation::Prefix => "* + 3 4 5",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "infix" | "infixa" => Ok(Notation::Infix),
            "postfix" | "rpn" | "pos-fixa" => Ok(Notation::Postfix),
            "prefix" | "polish" | "pre-fixa" => Ok(Notation::Prefix),
            _ => Err(EngineError::InvalidNotation(tag.to_string())),
        }
    }
}
