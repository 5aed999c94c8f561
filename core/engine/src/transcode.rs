//! FILENAME: core/engine/src/transcode.rs
//! PURPOSE: Rewrites expressions between postfix, prefix and infix.
//! CONTEXT: Pure restructuring, no arithmetic. Postfix and prefix are built
//! as token fragments and rendered with single spaces; infix is built as
//! text and is fully parenthesized below the root.

use crate::error::EngineResult;
use crate::stack::{reduce_postfix, reduce_prefix};
use parser::{render, tokenize_words, Literal, Operator, Token};

// ============================================================================
// TOKEN-LEVEL CONVERSIONS
// ============================================================================

/// Postfix tokens --> prefix tokens.
pub fn prefix_of(postfix: &[Token]) -> EngineResult<Vec<Token>> {
    reduce_postfix(postfix, leaf_fragment, |op, left, right, _| {
        let mut fragment = Vec::with_capacity(left.len() + right.len() + 1);
        fragment.push(Token::Operator(op));
        fragment.extend(left);
        fragment.extend(right);
        Ok(fragment)
    })
}

/// Prefix tokens --> postfix tokens.
pub fn postfix_of(prefix: &[Token]) -> EngineResult<Vec<Token>> {
    reduce_prefix(prefix, leaf_fragment, |op, mut left, right, _| {
        left.extend(right);
        left.push(Token::Operator(op));
        Ok(left)
    })
}

/// Postfix tokens --> infix text, e.g. `3 4 + 5 *` --> `(3 + 4) * 5`.
pub fn infix_of(postfix: &[Token]) -> EngineResult<String> {
    let (text, compound) = reduce_postfix(
        postfix,
        |lit| (lit.text().to_string(), false),
        |op: Operator, (left, _): (String, bool), (right, _): (String, bool), _| {
            Ok((format!("({} {} {})", left, op, right), true))
        },
    )?;

    // Only an operator application carries the outer pair.
    if compound {
        Ok(text[1..text.len() - 1].to_string())
    } else {
        Ok(text)
    }
}

fn leaf_fragment(lit: &Literal) -> Vec<Token> {
    vec![Token::Literal(lit.clone())]
}

// ============================================================================
// TEXT-LEVEL CONVERSIONS
// ============================================================================

pub fn postfix_to_prefix(expression: &str) -> EngineResult<String> {
    let tokens = tokenize_words(expression)?;
    let prefix = prefix_of(&tokens)?;
    log::debug!(target: "XCODE", "postfix {:?} --> prefix {:?}", expression, render(&prefix));
    Ok(render(&prefix))
}

pub fn prefix_to_postfix(expression: &str) -> EngineResult<String> {
    let tokens = tokenize_words(expression)?;
    let postfix = postfix_of(&tokens)?;
    log::debug!(target: "XCODE", "prefix {:?} --> postfix {:?}", expression, render(&postfix));
    Ok(render(&postfix))
}

pub fn postfix_to_infix(expression: &str) -> EngineResult<String> {
    let tokens = tokenize_words(expression)?;
    let infix = infix_of(&tokens)?;
    log::debug!(target: "XCODE", "postfix {:?} --> infix {:?}", expression, infix);
    Ok(infix)
}
