//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// coordavg - average a LaTeX coordinate list and rewrite it as a point list
///
/// Reads `input.txt`, prints the mean x and mean y values, and writes the
/// points to `output.txt` as `(x1,y1),(x2,y2),...`.
#[derive(Parser, Debug, Default)]
#[command(name = "coordavg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file holding the LaTeX coordinate list
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output file for the normalized point list
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    // === Output Options ===
    /// Also write a JSON run summary to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Pretty-print the JSON summary
    #[arg(long)]
    pub pretty_json: bool,

    /// Re-read the output file and check it matches the input points
    #[arg(long)]
    pub verify: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - parse and print means without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.pretty_json && self.json_output.is_none() && self.config.is_none() {
            anyhow::bail!("--pretty-json requires --json-output");
        }

        if self.dry_run && self.verify {
            anyhow::bail!("--verify cannot be combined with --dry-run (nothing is written)");
        }

        Ok(())
    }
}
