//! Output verification
//!
//! Re-reads a written point list and checks it reproduces the coordinates
//! that were parsed from the input, in the same order.

use crate::output::normalized;
use crate::parse::Coordinate;
use crate::Result;
use std::path::Path;

/// Verification result
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationResult {
    /// Every point matches
    Success,
    /// Point count differs
    CountMismatch {
        expected: usize,
        actual: usize,
    },
    /// A point differs
    ValueMismatch {
        /// Index of first mismatch
        index: usize,
        expected: Coordinate,
        actual: Coordinate,
    },
}

impl VerificationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationResult::Success)
    }
}

/// Compare two point sequences
///
/// Values are compared bit for bit, so `NaN` tokens verify against themselves.
pub fn verify_points(expected: &[Coordinate], actual: &[Coordinate]) -> VerificationResult {
    if expected.len() != actual.len() {
        return VerificationResult::CountMismatch {
            expected: expected.len(),
            actual: actual.len(),
        };
    }

    let same = |a: &Coordinate, b: &Coordinate| {
        a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
    };

    match expected
        .iter()
        .zip(actual)
        .position(|(e, a)| !same(e, a))
    {
        Some(index) => VerificationResult::ValueMismatch {
            index,
            expected: expected[index],
            actual: actual[index],
        },
        None => VerificationResult::Success,
    }
}

/// Read the point list at `path` and compare it with `expected`
pub fn verify_output(path: &Path, expected: &[Coordinate]) -> Result<VerificationResult> {
    let actual = normalized::read_points(path)?;
    let result = verify_points(expected, &actual);
    log::debug!("Verification of {}: {:?}", path.display(), result);
    Ok(result)
}
