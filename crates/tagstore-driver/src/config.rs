//! # Driver Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --input script.txt  --echo  --json  --log debug                    │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TAGSTORE_LOG=debug                                                 │
//! │     TAGSTORE_ECHO=true                                                 │
//! │     TAGSTORE_OUTPUT=json                                               │
//! │     TAGSTORE_INPUT=script.txt                                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     log "info", no echo, text output, read stdin                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// How the run summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "output".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Print each command's result as it runs.
    pub echo: bool,

    /// Summary format.
    pub output: OutputFormat,

    /// Script to read; stdin when `None`.
    pub input: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            log_filter: "info".to_string(),
            echo: false,
            output: OutputFormat::Text,
            input: None,
        }
    }
}

impl DriverConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DriverConfig::default();

        if let Some(filter) = lookup("TAGSTORE_LOG") {
            config.log_filter = filter;
        }

        if let Some(echo) = lookup("TAGSTORE_ECHO") {
            config.echo = parse_bool("TAGSTORE_ECHO", &echo)?;
        }

        if let Some(output) = lookup("TAGSTORE_OUTPUT") {
            config.output = output.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TAGSTORE_OUTPUT".to_string(),
                value: output.clone(),
            })?;
        }

        if let Some(input) = lookup("TAGSTORE_INPUT") {
            config.input = Some(PathBuf::from(input));
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the current values.
    ///
    /// Returns `Ok(false)` when `--help` was given.
    pub fn apply_args<I>(&mut self, args: I) -> Result<bool, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" | "-i" => {
                    let path = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    self.input = Some(PathBuf::from(path));
                }
                "--log" | "-l" => {
                    self.log_filter = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                }
                "--echo" | "-e" => self.echo = true,
                "--json" => self.output = OutputFormat::Json,
                "--help" | "-h" => return Ok(false),
                // A bare argument is the script path
                other if !other.starts_with('-') => self.input = Some(PathBuf::from(other)),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(true)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
tagstore command script driver

Usage: tagstore-driver [OPTIONS] [SCRIPT]

Options:
  -i, --input <PATH>   Command script to run (default: stdin)
  -l, --log <FILTER>   Log filter when RUST_LOG is unset (default: info)
  -e, --echo           Print every command result
      --json           Print the summary as JSON
  -h, --help           Show this help message";
