//! FILENAME: app/cli/src/tests.rs
//! PURPOSE: Tests for config loading, log formatting and the menu shell.

use crate::config::{load_config_file, load_config_str, ShellConfig};
use crate::logging::{filter_for_verbosity, format_line};
use crate::options::Options;
use crate::shell::{format_result, Shell};
use engine::Notation;
use std::io::{Cursor, Write};

fn run_menu(input: &str, precision: Option<usize>) -> String {
    let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), precision);
    shell.run_menu().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

// ========================================
// CONFIG TESTS
// ========================================

#[test]
fn config_parses_all_fields() {
    let config = load_config_str(
        r#"
        notation = "postfix"
        precision = 3
        log_file = "calc.log"
        "#,
    )
    .unwrap();
    assert_eq!(config.notation, Some(Notation::Postfix));
    assert_eq!(config.precision, Some(3));
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("calc.log")));
}

#[test]
fn config_empty_file_is_default() {
    let config = load_config_str("").unwrap();
    assert_eq!(config, ShellConfig::default());
    assert_eq!(config.notation(), Notation::Infix);
}

#[test]
fn config_rejects_unknown_keys_and_notations() {
    assert!(load_config_str("colour = \"red\"").is_err());
    assert!(load_config_str("notation = \"sideways\"").is_err());
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "notation = \"prefix\"").unwrap();
    let config = load_config_file(file.path()).unwrap();
    assert_eq!(config.notation(), Notation::Prefix);
}

#[test]
fn config_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_file(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn options_override_config() {
    let config = ShellConfig {
        notation: Some(Notation::Prefix),
        precision: Some(2),
        log_file: None,
    };
    let options = Options {
        notation: Some(Notation::Postfix),
        ..Options::default()
    };
    let merged = config.with_options(&options);
    assert_eq!(merged.notation, Some(Notation::Postfix));
    assert_eq!(merged.precision, Some(2));
}

// ========================================
// LOGGING TESTS
// ========================================

#[test]
fn log_line_uses_unified_format() {
    assert_eq!(
        format_line(7, log::Level::Debug, "EVAL", "3 + 4 = 7"),
        "7|D|EVAL|3 + 4 = 7"
    );
}

#[test]
fn verbosity_maps_to_filters() {
    assert_eq!(filter_for_verbosity(0), "error");
    assert_eq!(filter_for_verbosity(3), "debug");
    assert_eq!(filter_for_verbosity(9), "trace");
}

// ========================================
// SHELL TESTS
// ========================================

#[test]
fn result_formatting() {
    assert_eq!(format_result(35.0, None), "35.0");
    assert_eq!(format_result(1.0 / 3.0, Some(2)), "0.33");
}

#[test]
fn menu_calculates_infix() {
    let out = run_menu("1\n(3+4)*5\n0\n", None);
    assert!(out.contains("Result: 35.0"));
    assert!(out.contains("Infix: (3 + 4) * 5"));
    assert!(out.contains("Postfix: 3 4 + 5 *"));
    assert!(out.contains("Prefix: * + 3 4 5"));
    assert!(out.ends_with("Leaving the calculator...\n"));
}

#[test]
fn menu_calculates_prefix_with_precision() {
    let out = run_menu("3\n/ 1 3\n0\n", Some(4));
    assert!(out.contains("Result: 0.3333"));
    assert!(out.contains("Postfix: 1 3 /"));
}

#[test]
fn menu_reports_errors_and_continues() {
    let out = run_menu("2\n4 0 /\n2\n4 2 /\n", None);
    assert!(out.contains("Error: Division by zero at token 2"));
    assert!(out.contains("Result: 2.0"));
}

#[test]
fn menu_rejects_bad_choice_and_empty_expression() {
    let out = run_menu("7\n1\n   \n0\n", None);
    assert!(out.contains("Invalid option!"));
    assert!(out.contains("Empty expression!"));
}

#[test]
fn menu_stops_at_end_of_input() {
    let out = run_menu("", None);
    assert!(out.contains("Leaving the calculator..."));
}

#[test]
fn one_shot_prints_json() {
    let mut shell = Shell::new(Cursor::new(String::new()), Vec::new(), None);
    shell.one_shot("3 4 + 5 *", Notation::Postfix, true).unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["result"], 35.0);
    assert_eq!(value["infix"], "(3 + 4) * 5");
}

#[test]
fn one_shot_fails_on_bad_input() {
    let mut shell = Shell::new(Cursor::new(String::new()), Vec::new(), None);
    let err = shell.one_shot("(3 + 4", Notation::Infix, false).unwrap_err();
    assert!(format!("{:#}", err).contains("Unbalanced parentheses"));
}
