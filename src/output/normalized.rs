//! Normalized point list output
//!
//! Rewrites the stripped tokens as `(x1,y1),(x2,y2),...`, the point list
//! format read by the curve visualiser's `points` key. Token text is copied
//! verbatim; no numeric reformatting takes place.

use crate::parse::Coordinate;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Separator between two points in the normalized list
pub const POINT_SEPARATOR: &str = "),(";

/// Wrap each token in parentheses and join with `,`
pub fn render<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| format!("({})", t.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render tokens and write them to `path`, replacing any existing file
///
/// No trailing newline is written.
pub fn write_output<S: AsRef<str>>(path: &Path, tokens: &[S]) -> Result<()> {
    let content = render(tokens);
    fs::write(path, content.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    log::info!("Wrote {} points to {}", tokens.len(), path.display());
    Ok(())
}

/// Parse a normalized point list back into coordinates
pub fn parse_points(text: &str) -> Result<Vec<Coordinate>> {
    let inner = text
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .with_context(|| format!("Point list must be wrapped in parentheses: {:?}", text))?;

    inner
        .split(POINT_SEPARATOR)
        .enumerate()
        .map(|(i, point)| Coordinate::from_token(i, point).map_err(anyhow::Error::from))
        .collect()
}

/// Read and parse a normalized point list file
pub fn read_points(path: &Path) -> Result<Vec<Coordinate>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read point list: {}", path.display()))?;

    parse_points(&content)
        .with_context(|| format!("Failed to parse point list: {}", path.display()))
}
