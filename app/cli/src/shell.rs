//! FILENAME: app/cli/src/shell.rs
//! PURPOSE: The interactive menu and one-shot printing.
//! CONTEXT: Presentation only. Every expression is handed to
//! `engine::calculate_with`; errors are printed and the menu continues.

use anyhow::{Context, Result};
use engine::{calculate_with, Calculation, Notation};
use std::io::{BufRead, Write};

const RULE: &str = "==================================================";

pub struct Shell<R, W> {
    input: R,
    output: W,
    precision: Option<usize>,
}

/// A menu choice.
enum Choice {
    Quit,
    Calculate(Notation),
    Invalid,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, precision: Option<usize>) -> Self {
        Shell {
            input,
            output,
            precision,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run_menu(&mut self) -> Result<()> {
        writeln!(self.output, "=== MULTI-NOTATION CALCULATOR ===")?;
        writeln!(self.output, "Available notations:")?;
        for (n, notation) in Notation::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {} (e.g. {})", n + 1, notation, notation.example())?;
        }

        loop {
            writeln!(self.output, "\n{}", RULE)?;
            writeln!(self.output, "Choose the notation of your expression:")?;
            writeln!(self.output, "1 - Infix")?;
            writeln!(self.output, "2 - Postfix")?;
            writeln!(self.output, "3 - Prefix")?;
            writeln!(self.output, "0 - Quit")?;

            let line = match self.prompt("\nYour choice: ")? {
                Some(line) => line,
                None => break,
            };

            let notation = match parse_choice(&line) {
                Choice::Quit => break,
                Choice::Invalid => {
                    writeln!(self.output, "Invalid option!")?;
                    continue;
                }
                Choice::Calculate(notation) => notation,
            };

            writeln!(self.output, "\nSelected notation: {}", notation)?;
            writeln!(self.output, "Example: {}", notation.example())?;
            writeln!(self.output, "Supported operators: +, -, *, /, ^")?;

            let expression = match self.prompt(&format!("\nEnter a {} expression: ", notation))? {
                Some(expression) => expression,
                None => break,
            };
            if expression.is_empty() {
                writeln!(self.output, "Empty expression!")?;
                continue;
            }

            match calculate_with(&expression, notation) {
                Ok(calc) => {
                    writeln!(self.output, "\n{}", RULE)?;
                    writeln!(self.output, "RESULTS:")?;
                    self.print_calculation(&calc)?;
                }
                Err(err) => {
                    log::warn!(target: "SHELL", "{:?} rejected: {}", expression, err);
                    writeln!(self.output, "\nError: {}", err)?;
                    writeln!(self.output, "Check that the expression is correct!")?;
                }
            }
        }

        writeln!(self.output, "Leaving the calculator...")?;
        Ok(())
    }

    /// Calculates one expression and prints it, as text or JSON.
    pub fn one_shot(&mut self, expression: &str, notation: Notation, json: bool) -> Result<()> {
        let calc = calculate_with(expression, notation)
            .with_context(|| format!("Cannot calculate {} expression {:?}", notation, expression))?;
        if json {
            let text = serde_json::to_string_pretty(&calc).context("Failed to encode result")?;
            writeln!(self.output, "{}", text)?;
        } else {
            self.print_calculation(&calc)?;
        }
        Ok(())
    }

    fn print_calculation(&mut self, calc: &Calculation) -> Result<()> {
        let result = format_result(calc.result, self.precision);
        writeln!(self.output, "Result: {}", result)?;
        writeln!(self.output, "Infix: {}", calc.infix)?;
        writeln!(self.output, "Postfix: {}", calc.postfix)?;
        writeln!(self.output, "Prefix: {}", calc.prefix)?;
        Ok(())
    }

    /// Prints `message` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn parse_choice(line: &str) -> Choice {
    match line {
        "0" => Choice::Quit,
        "1" => Choice::Calculate(Notation::Infix),
        "2" => Choice::Calculate(Notation::Postfix),
        "3" => Choice::Calculate(Notation::Prefix),
        _ => Choice::Invalid,
    }
}

/// `35.0` style by default, fixed digits when a precision is configured.
pub fn format_result(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{:?}", value),
    }
}
