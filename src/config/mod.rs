//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! With no arguments and no config file the fixed paths `input.txt` and
//! `output.txt` in the working directory are used.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default input file name
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// File holding the LaTeX coordinate list
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File receiving the normalized point list
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Optional JSON summary file
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON summary
    #[serde(default)]
    pub pretty_json: bool,
    /// Re-read the point list after writing and compare it with the input
    #[serde(default)]
    pub verify: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            json_output: None,
            pretty_json: false,
            verify: false,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Parse and print means without writing any file
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input={} output={}",
            self.input.path.display(),
            self.output.path.display()
        )?;
        if let Some(ref json) = self.output.json_output {
            write!(f, " json={}", json.display())?;
        }
        if self.output.verify {
            write!(f, " verify")?;
        }
        if self.runtime.dry_run {
            write!(f, " dry-run")?;
        }
        Ok(())
    }
}
