//! Coordinate averager
//!
//! Runs the whole pipeline for one input file:
//!
//! 1. Read the raw document
//! 2. Split it into coordinate tokens
//! 3. Parse x/y from every token
//! 4. Accumulate running totals
//! 5. Print mean x and mean y
//! 6. Write the tokens back as a `(x,y),(x,y)` point list
//!
//! Parsing completes before anything is printed or written, so a malformed
//! input leaves stdout and the output file untouched.

use crate::config::Config;
use crate::output::json::{self, RunSummary};
use crate::output::{normalized, text};
use crate::parse::{self, ParsedDocument};
use crate::stats::CoordinateStats;
use crate::util::verification::{self, VerificationResult};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::Write;

/// Parsed document together with its statistics
#[derive(Debug, Clone)]
pub struct Averaged {
    pub document: ParsedDocument,
    pub stats: CoordinateStats,
}

impl Averaged {
    pub fn mean_x(&self) -> Option<f64> {
        self.stats.mean_x()
    }

    pub fn mean_y(&self) -> Option<f64> {
        self.stats.mean_y()
    }

    /// The normalized point list for this document
    pub fn render(&self) -> String {
        normalized::render(&self.document.tokens)
    }
}

/// Parse raw text and compute the statistics, without any I/O
pub fn average(text: &str) -> Result<Averaged> {
    let document = parse::parse_document(text)?;
    let stats = CoordinateStats::from_coordinates(&document.coordinates);

    if stats.count() == 0 {
        return Err(parse::ParseError::EmptyInput.into());
    }

    Ok(Averaged { document, stats })
}

/// Run the averager with the given configuration
///
/// The means are printed to `out`. Returns a summary of the run.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
    let input = &config.input.path;
    let output = &config.output.path;

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    log::debug!("Read {} bytes from {}", raw.len(), input.display());

    let averaged = average(&raw)
        .with_context(|| format!("Failed to parse coordinates in {}", input.display()))?;
    log::info!(
        "Averaged {} coordinates from {}",
        averaged.stats.count(),
        input.display()
    );

    text::print_means(out, &averaged.stats)?;

    let mut summary = RunSummary::new(input, output, &averaged.stats)?;

    if config.runtime.dry_run {
        log::info!("Dry run - not writing {}", output.display());
    } else {
        normalized::write_output(output, &averaged.document.tokens)?;
        summary.written = true;

        if config.output.verify {
            let result = verification::verify_output(output, &averaged.document.coordinates)?;
            summary.verified = Some(result.is_success());
            check_verification(&result, output)?;
        }
    }

    if let Some(ref json_path) = config.output.json_output {
        json::write_json_output(json_path, &summary, config.output.pretty_json)?;
    }

    Ok(summary)
}

fn check_verification(result: &VerificationResult, path: &std::path::Path) -> Result<()> {
    match result {
        VerificationResult::Success => Ok(()),
        VerificationResult::CountMismatch { expected, actual } => anyhow::bail!(
            "Verification of {} failed: expected {} points, found {}",
            path.display(),
            expected,
            actual
        ),
        VerificationResult::ValueMismatch {
            index,
            expected,
            actual,
        } => anyhow::bail!(
            "Verification of {} failed at point {}: expected {}, found {}",
            path.display(),
            index,
            expected,
            actual
        ),
    }
}
