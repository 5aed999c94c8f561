//! FILENAME: app/cli/src/lib.rs
//! PURPOSE: Wires options, config and logging around the calculator shell.

pub mod config;
pub mod logging;
pub mod options;
pub mod shell;

#[cfg(test)]
mod tests;

use anyhow::Result;
use config::{load_config_file, ShellConfig};
use options::Options;
use shell::Shell;
use structopt::StructOpt;

pub fn run() -> Result<()> {
    let options = Options::from_args();

    let config = match &options.config {
        Some(path) => load_config_file(path)?,
        None => ShellConfig::default(),
    }
    .with_options(&options);

    logging::init(options.verbosity, config.log_file.as_deref())?;
    log::info!(target: "SYS", "polycalc starting, config={:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config.precision);

    match options.expression() {
        Some(expression) => shell.one_shot(&expression, config.notation(), options.json),
        None => shell.run_menu(),
    }
}
