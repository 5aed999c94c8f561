//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the engine integration tests.

/// Infix expressions with their value under left-to-right, precedence-respecting
/// arithmetic (`^` groups left like every other operator).
pub const INFIX_CASES: &[(&str, f64)] = &[
    ("1", 1.0),
    ("1 + 2", 3.0),
    ("(3 + 4) * 5", 35.0),
    ("3 + 4 * 5", 23.0),
    ("10 - 4 - 3", 3.0),
    ("48 / 4 / 2", 6.0),
    ("2 * 3 ^ 2", 18.0),
    ("2 ^ 3 ^ 2", 64.0),
    ("(1.5 + .5) * (8 - 6) / 4", 1.0),
    ("((2))", 2.0),
    ("100/(2+3)^2", 4.0),
    ("7 - (2 - (1 - 4))", 2.0),
    ("2^0.5^2", 2.0),
];

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
