//! End-to-end tests for coordavg
//!
//! Exercise the library pipeline and the compiled binary against real files.

use coordavg::config::Config;
use coordavg::output::normalized;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SCENARIO: &str = "$$\\left(1,2\\right),\\left(3,4\\right)$$\n";

fn write_input(dir: &Path, content: &str) {
    fs::write(dir.join("input.txt"), content).expect("Failed to write input");
}

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.input.path = dir.join("input.txt");
    config.output.path = dir.join("output.txt");
    config
}

/// Build a LaTeX list from (x, y) pairs
fn latex_list(points: &[(f64, f64)]) -> String {
    let body = points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join("\\right),\\left(");
    format!("P = \\left({}\\right)\\;", body)
}

// =============================================================================
// Library pipeline
// =============================================================================

#[test]
fn test_means_match_arithmetic_mean() {
    let dir = TempDir::new().unwrap();
    let points: Vec<(f64, f64)> = (0..25)
        .map(|i| (i as f64 * 1.5 - 7.0, (i * i) as f64 / 4.0))
        .collect();
    write_input(dir.path(), &latex_list(&points));

    let mut stdout: Vec<u8> = Vec::new();
    let summary = coordavg::run(&config_for(dir.path()), &mut stdout).unwrap();

    let n = points.len() as f64;
    let expected_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let expected_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    assert_eq!(summary.count, 25);
    assert!((summary.mean_x - expected_x).abs() < 1e-9);
    assert!((summary.mean_y - expected_y).abs() < 1e-9);

    let printed = String::from_utf8(stdout).unwrap();
    let lines: Vec<f64> = printed.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(lines, vec![summary.mean_x, summary.mean_y]);
}

#[test]
fn test_output_point_count_matches_input() {
    let dir = TempDir::new().unwrap();
    let points = [(1.0, 1.0), (-2.5, 3.0), (0.0, 0.0), (4.0, -8.0)];
    write_input(dir.path(), &latex_list(&points));

    let config = config_for(dir.path());
    coordavg::run(&config, &mut Vec::<u8>::new()).unwrap();

    let read_back = normalized::read_points(&config.output.path).unwrap();
    assert_eq!(read_back.len(), points.len());
    assert_eq!(read_back[1].x, -2.5);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), SCENARIO);
    let config = config_for(dir.path());

    let mut first_stdout: Vec<u8> = Vec::new();
    coordavg::run(&config, &mut first_stdout).unwrap();
    let first_output = fs::read_to_string(&config.output.path).unwrap();

    let mut second_stdout: Vec<u8> = Vec::new();
    coordavg::run(&config, &mut second_stdout).unwrap();
    let second_output = fs::read_to_string(&config.output.path).unwrap();

    assert_eq!(first_stdout, second_stdout);
    assert_eq!(first_output, second_output);
    assert_eq!(first_output, "(1,2),(3,4)");
}

#[test]
fn test_two_comma_token_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "\\left(1,2\\right),\\left(3,4,5\\right)");

    let mut stdout: Vec<u8> = Vec::new();
    let err = coordavg::run(&config_for(dir.path()), &mut stdout).unwrap_err();

    assert!(err.chain().any(|e| e.to_string().contains("exactly one ','")));
    assert!(stdout.is_empty());
}

// =============================================================================
// Binary
// =============================================================================

fn coordavg_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_coordavg"))
}

#[test]
fn test_binary_uses_fixed_file_names() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), SCENARIO);

    let output = coordavg_bin()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run coordavg");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.0\n3.0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "(1,2),(3,4)"
    );
}

#[test]
fn test_binary_fails_without_input() {
    let dir = TempDir::new().unwrap();

    let output = coordavg_bin()
        .current_dir(dir.path())
        .output()
        .expect("Failed to run coordavg");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input.txt"));
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_binary_with_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("curve.tex"), SCENARIO).unwrap();
    fs::write(
        dir.path().join("coordavg.toml"),
        "[input]\npath = \"curve.tex\"\n\n[output]\npath = \"points.txt\"\nverify = true\n",
    )
    .unwrap();

    let output = coordavg_bin()
        .current_dir(dir.path())
        .args(["--config", "coordavg.toml"])
        .output()
        .expect("Failed to run coordavg");

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("points.txt")).unwrap(),
        "(1,2),(3,4)"
    );
    assert!(!dir.path().join("output.txt").exists());
}
