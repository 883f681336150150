//! Command-line surface.

use std::num::ParseIntError;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{Config, ConfigError, MAX_ARRAY_LEN};
use crate::sort::Algorithm;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("invalid value '{value}' in --values: {source}")]
    BadValue {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("--values has {len} elements, the maximum is {max}")]
    TooLong { len: usize, max: usize },
}

/// Animate comparison sorts on a random array.
#[derive(Debug, Clone, Parser)]
#[command(name = "sortviz", version, about)]
pub struct Cli {
    /// Config file (defaults to ~/.config/sortviz/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Algorithm to select: bubble, insertion or quick.
    #[arg(short, long, value_name = "ALGO")]
    pub algorithm: Option<Algorithm>,

    /// Number of elements to generate.
    #[arg(long, value_name = "N")]
    pub length: Option<usize>,

    /// Pause after each step, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Seed for the array generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sort this comma-separated array instead of a generated one.
    #[arg(long, value_name = "LIST")]
    pub values: Option<String>,

    /// Play one run without the terminal UI, printing each frame.
    #[arg(long)]
    pub headless: bool,

    /// Print the raw step sequence as JSON lines and exit.
    #[arg(long, conflicts_with = "headless")]
    pub json: bool,
}

impl Cli {
    /// Load the config file and layer command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(algorithm) = self.algorithm {
            config.defaults.algorithm = algorithm;
        }
        if let Some(length) = self.length {
            config.array.length = length;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.animation.step_delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            config.array.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    /// The explicit array from `--values`, if given. Held to the same
    /// length limit as generated arrays.
    pub fn explicit_values(&self) -> Result<Option<Vec<u32>>, ArgsError> {
        let Some(raw) = self.values.as_deref() else {
            return Ok(None);
        };
        let values = parse_values(raw)?;
        if values.len() > MAX_ARRAY_LEN {
            return Err(ArgsError::TooLong {
                len: values.len(),
                max: MAX_ARRAY_LEN,
            });
        }
        Ok(Some(values))
    }
}

/// Parse `"3, 1,2"` into `[3, 1, 2]`. Empty input yields an empty array.
pub fn parse_values(raw: &str) -> Result<Vec<u32>, ArgsError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>().map_err(|source| ArgsError::BadValue {
                value: part.to_string(),
                source,
            })
        })
        .collect()
}
