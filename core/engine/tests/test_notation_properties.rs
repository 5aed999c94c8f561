//! FILENAME: tests/test_notation_properties.rs
//! Cross-notation properties: every form of an expression agrees.

mod common;

use common::{assert_close, INFIX_CASES};
use engine::{
    calculate_with, evaluate_postfix, infix_to_postfix, postfix_to_infix, postfix_to_prefix,
    prefix_to_postfix, EngineError, Notation,
};

#[test]
fn infix_evaluation_matches_expected_values() {
    for (infix, expected) in INFIX_CASES {
        let postfix = infix_to_postfix(infix).unwrap();
        assert_close(evaluate_postfix(&postfix).unwrap(), *expected, infix);
    }
}

#[test]
fn prefix_round_trip_is_identity() {
    for (infix, _) in INFIX_CASES {
        let postfix = infix_to_postfix(infix).unwrap();
        let prefix = postfix_to_prefix(&postfix).unwrap();
        assert_eq!(prefix_to_postfix(&prefix).unwrap(), postfix, "{}", infix);
    }
}

#[test]
fn derived_infix_preserves_evaluation_order() {
    for (infix, _) in INFIX_CASES {
        let postfix = infix_to_postfix(infix).unwrap();
        let derived = postfix_to_infix(&postfix).unwrap();
        assert_eq!(infix_to_postfix(&derived).unwrap(), postfix, "{} -> {}", infix, derived);
    }
}

#[test]
fn all_three_inputs_agree() {
    for (infix, expected) in INFIX_CASES {
        let from_infix = calculate_with(infix, Notation::Infix).unwrap();
        let from_postfix = calculate_with(&from_infix.postfix, Notation::Postfix).unwrap();
        let from_prefix = calculate_with(&from_infix.prefix, Notation::Prefix).unwrap();

        for calc in [&from_infix, &from_postfix, &from_prefix] {
            assert_close(calc.result, *expected, infix);
            assert_eq!(calc.infix, from_infix.infix);
            assert_eq!(calc.postfix, from_infix.postfix);
            assert_eq!(calc.prefix, from_infix.prefix);
        }
    }
}

#[test]
fn postfix_input_whitespace_is_normalized_in_derived_forms() {
    let calc = calculate_with("  3   4 +  5 * ", Notation::Postfix).unwrap();
    assert_eq!(calc.postfix, "3   4 +  5 *");
    assert_eq!(calc.prefix, "* + 3 4 5");
    assert_eq!(calc.infix, "(3 + 4) * 5");
}

#[test]
fn errors_surface_unchanged() {
    assert!(matches!(
        evaluate_postfix("4 0 /"),
        Err(EngineError::DivisionByZero { .. })
    ));
    assert!(matches!(
        calculate_with("3 4", Notation::Postfix),
        Err(EngineError::DanglingOperands { count: 2 })
    ));
    assert!(matches!(
        calculate_with("", Notation::Prefix),
        Err(EngineError::EmptyExpression)
    ));
    assert!(matches!(
        engine::calculate("1 2 +", "sideways"),
        Err(EngineError::InvalidNotation(_))
    ));
}
