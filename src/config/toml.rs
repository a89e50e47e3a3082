//! TOML configuration file parsing
//!
//! ```toml
//! [input]
//! path = "curve.tex"
//!
//! [output]
//! path = "curve_points.txt"
//! json_output = "summary.json"
//! verify = true
//! ```

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(ref path) = cli.input {
        config.input.path = path.clone();
    }
    if let Some(ref path) = cli.output {
        config.output.path = path.clone();
    }

    // Override output settings
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.pretty_json {
        config.output.pretty_json = true;
    }
    if cli.verify {
        config.output.verify = true;
    }

    // Override runtime settings
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    config
}

/// Build the effective configuration from CLI arguments and an optional config file
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_toml_string() {
        let config = parse_toml_string(
            r#"
[input]
path = "curve.tex"

[output]
path = "points.txt"
json_output = "summary.json"
pretty_json = true
verify = true

[runtime]
debug = true
"#,
        )
        .unwrap();

        assert_eq!(config.input.path, PathBuf::from("curve.tex"));
        assert_eq!(config.output.path, PathBuf::from("points.txt"));
        assert_eq!(config.output.json_output, Some(PathBuf::from("summary.json")));
        assert!(config.output.pretty_json);
        assert!(config.output.verify);
        assert!(config.runtime.debug);
        assert!(!config.runtime.dry_run);
    }

    #[test]
    fn test_partial_section_keeps_default_path() {
        let config = parse_toml_string("[output]\nverify = true\n").unwrap();
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.output.verify);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_toml_string("[input\npath = ").is_err());
        assert!(parse_toml_string("[input]\npath = 42\n").is_err());
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let file_config = parse_toml_string("[input]\npath = \"from_file.tex\"\n").unwrap();
        let cli = Cli {
            output: Some(PathBuf::from("from_cli.txt")),
            dry_run: true,
            ..Default::default()
        };

        let merged = merge_cli_with_config(&cli, file_config);
        assert_eq!(merged.input.path, PathBuf::from("from_file.tex"));
        assert_eq!(merged.output.path, PathBuf::from("from_cli.txt"));
        assert!(merged.runtime.dry_run);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coordavg.toml");
        fs::write(&path, "[output]\njson_output = \"s.json\"\n").unwrap();

        let cli = Cli {
            config: Some(path),
            ..Default::default()
        };
        let config = load_config(&cli).unwrap();
        assert_eq!(config.output.json_output, Some(PathBuf::from("s.json")));
        assert_eq!(config.input.path, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn test_load_config_missing_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/coordavg.toml")),
            ..Default::default()
        };
        assert!(load_config(&cli).is_err());
    }
}
