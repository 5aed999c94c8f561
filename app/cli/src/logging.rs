//! FILENAME: app/cli/src/logging.rs
// PURPOSE: Unified logging for the shell and the core crates.
// FORMAT: seq|level|category|message

use anyhow::{Context, Result};
use log::Level;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global sequence counter, one number per emitted line
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default filter for a `-v` count. `RUST_LOG` still wins when set.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

/// Formats one log line. The core crates use upper-case targets
/// (`LEXER`, `SHUNT`, `EVAL`, `XCODE`, `CALC`) as categories.
pub fn format_line(seq: u64, level: Level, category: &str, message: impl Display) -> String {
    format!("{}|{}|{}|{}", seq, level_code(level), category, message)
}

/// Installs the logger. Lines go to `log_file` (appended) when given,
/// otherwise to stderr so they never mix with calculator output.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(filter_for_verbosity(verbosity));
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{}",
            format_line(next_seq(), record.level(), record.target(), record.args())
        )
    });

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}
