//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the notation engine.
//! CONTEXT: Evaluates postfix, converts between postfix, prefix and infix, and
//! exposes `calculate`, which accepts any of the three. Tokenizing and the
//! infix --> postfix conversion come from the `parser` crate.

pub mod calculation;
pub mod error;
pub mod evaluator;
pub mod notation;
mod stack;
pub mod transcode;


// Re-export commonly used types at the crate root
pub use calculation::{calculate, calculate_with, Calculation};
pub use error::{EngineError, EngineResult};
pub use evaluator::{evaluate, evaluate_postfix};
pub use notation::Notation;
pub use parser::{infix_to_postfix, ParseError};
pub use transcode::{infix_of, postfix_of, postfix_to_infix, postfix_to_prefix, prefix_of, prefix_to_postfix};
