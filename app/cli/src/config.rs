//! Loads shell settings from an optional `polycalc.toml` and merges command-line overrides.
use crate::options::Options;
use anyhow::{Context, Result};
use engine::Notation;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Notation used for one-shot expressions when `--notation` is absent.
    pub notation: Option<Notation>,
    /// Digits printed after the decimal point. Unset prints the shortest exact form.
    pub precision: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl ShellConfig {
    /// Command-line values override the file.
    pub fn with_options(mut self, options: &Options) -> Self {
        if options.notation.is_some() {
            self.notation = options.notation;
        }
        if options.precision.is_some() {
            self.precision = options.precision;
        }
        if options.log_file.is_some() {
            self.log_file = options.log_file.clone();
        }
        self
    }

    pub fn notation(&self) -> Notation {
        self.notation.unwrap_or(Notation::Infix)
    }
}

pub fn load_config_str(config: &str) -> Result<ShellConfig> {
    let c: ShellConfig = toml::from_str(config)?;
    Ok(c)
}

pub fn load_config_file(path: &Path) -> Result<ShellConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    load_config_str(&text).with_context(|| format!("Invalid config file {:?}", path))
}
