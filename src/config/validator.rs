//! Configuration validation

use super::*;
use anyhow::Result;
use std::path::Path;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_input(&config.input)?;
    validate_output(&config.output)?;
    validate_path_conflicts(config)?;

    Ok(())
}

/// Validate input configuration
pub fn validate_input(input: &InputConfig) -> Result<()> {
    if is_empty_path(&input.path) {
        anyhow::bail!("input path must not be empty");
    }
    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if is_empty_path(&output.path) {
        anyhow::bail!("output path must not be empty");
    }

    if let Some(ref json) = output.json_output {
        if is_empty_path(json) {
            anyhow::bail!("json_output path must not be empty");
        }
    }

    if output.pretty_json && output.json_output.is_none() {
        log::warn!("pretty_json has no effect without json_output");
    }

    Ok(())
}

/// Reject configurations where one file would overwrite another
///
/// Paths are compared as written; `./a` and `a` are treated as distinct.
fn validate_path_conflicts(config: &Config) -> Result<()> {
    let input = &config.input.path;
    let output = &config.output.path;

    if input == output {
        anyhow::bail!(
            "output path must differ from input path ({})",
            input.display()
        );
    }

    if let Some(ref json) = config.output.json_output {
        if json == input {
            anyhow::bail!("json_output must differ from input path ({})", input.display());
        }
        if json == output {
            anyhow::bail!("json_output must differ from output path ({})", output.display());
        }
    }

    Ok(())
}

fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
