//! Plain-text output of the means

use crate::stats::CoordinateStats;
use crate::Result;
use anyhow::Context;
use std::io::Write;

/// Format a mean for display
///
/// Uses the shortest representation that round-trips to the same `f64`,
/// always with a decimal point or exponent (`2.0`, `0.1`, `1e20`).
pub fn format_mean(value: f64) -> String {
    format!("{:?}", value)
}

/// Print mean x and mean y on two separate lines
pub fn print_means<W: Write>(out: &mut W, stats: &CoordinateStats) -> Result<()> {
    let mean_x = stats.mean_x().context("No coordinates recorded")?;
    let mean_y = stats.mean_y().context("No coordinates recorded")?;

    writeln!(out, "{}", format_mean(mean_x))?;
    writeln!(out, "{}", format_mean(mean_y))?;
    out.flush()?;

    Ok(())
}
