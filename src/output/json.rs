//! JSON run summary
//!
//! Machine-readable record of one averaging run: the paths involved, the
//! number of points, the totals and the two means.

use crate::stats::CoordinateStats;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub count: usize,
    pub total_x: f64,
    pub total_y: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    /// False for dry runs
    pub written: bool,
    /// Result of the read-back check, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl RunSummary {
    /// Build a summary from accumulated statistics
    pub fn new(input: &Path, output: &Path, stats: &CoordinateStats) -> Result<Self> {
        Ok(Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            count: stats.count(),
            total_x: stats.total_x(),
            total_y: stats.total_y(),
            mean_x: stats.mean_x().context("No coordinates recorded")?,
            mean_y: stats.mean_y().context("No coordinates recorded")?,
            written: false,
            verified: None,
        })
    }
}

/// Write JSON summary to file
pub fn write_json_output(output_path: &Path, summary: &RunSummary, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, summary)?;
    } else {
        serde_json::to_writer(&mut writer, summary)?;
    }
    writer.flush()?;

    log::debug!("Wrote JSON summary to {}", output_path.display());
    Ok(())
}
