use engine::Notation;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Clone, Debug, StructOpt, Default)]
#[structopt(name = "polycalc", about = "Converts and evaluates infix, postfix and prefix arithmetic")]
pub struct Options {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbosity: u8,

    /// Read settings from this TOML file
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Notation of EXPRESSION: infix, postfix (rpn) or prefix (polish)
    #[structopt(short, long)]
    pub notation: Option<Notation>,

    /// Print the calculation as JSON (one-shot mode only)
    #[structopt(long)]
    pub json: bool,

    /// Append log lines to this file instead of stderr
    #[structopt(long, parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    /// Digits printed after the decimal point
    #[structopt(long)]
    pub precision: Option<usize>,

    /// Expression to calculate. Without one, the interactive menu starts.
    pub expression: Vec<String>,
}

impl Options {
    /// The expression words joined back together, if any were given.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }
}
