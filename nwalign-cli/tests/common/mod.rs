#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the nwalign binary command
pub fn nwalign_cmd() -> Command {
    Command::cargo_bin("nwalign").unwrap()
}

/// Build an input record with an explicit scoring schema
pub fn input_record(
    seq1: &str,
    seq2: &str,
    match_score: i32,
    mismatch: i32,
    gap: i32,
) -> String {
    format!(
        r#"{{"seq1": "{}", "seq2": "{}", "scoring_schema": {{"match": {}, "mismatch": {}, "gap": {}}}}}"#,
        seq1, seq2, match_score, mismatch, gap
    )
}

/// Build an input record without a scoring schema
pub fn bare_record(seq1: &str, seq2: &str) -> String {
    format!(r#"{{"seq1": "{}", "seq2": "{}"}}"#, seq1, seq2)
}

/// The textbook example scored with match 1, mismatch -1, gap -1
pub fn gattaca_record() -> String {
    input_record("GATTACA", "GCATGCU", 1, -1, -1)
}

pub fn gattaca_matrix() -> Vec<Vec<i64>> {
    vec![
        vec![0, -1, -2, -3, -4, -5, -6, -7],
        vec![-1, 1, 0, -1, -2, -3, -4, -5],
        vec![-2, 0, 0, 1, 0, -1, -2, -3],
        vec![-3, -1, -1, 0, 2, 1, 0, -1],
        vec![-4, -2, -2, -1, 1, 1, 0, -1],
        vec![-5, -3, -3, -1, 0, 0, 0, -1],
        vec![-6, -4, -2, -2, -1, -1, 1, 0],
        vec![-7, -5, -3, -1, -2, -2, 0, 0],
    ]
}

/// Read a JSON file into a generic value
pub fn read_json(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Convert a JSON matrix into nested vectors
pub fn matrix_of(value: &Value) -> Vec<Vec<i64>> {
    value["matrix"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            row.as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_i64().unwrap())
                .collect()
        })
        .collect()
}

/// Test environment with isolated home, input and output directories
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub home_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let home_dir = temp_dir.path().join("home");
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");

        fs::create_dir_all(&home_dir)?;
        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            temp_dir,
            home_dir,
            input_dir,
            output_dir,
        })
    }

    /// Command isolated from the user's configuration and terminal colors
    pub fn cmd(&self) -> Command {
        let mut cmd = nwalign_cmd();
        cmd.env("NWALIGN_HOME", &self.home_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("NWALIGN_LOG");
        cmd
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write config.toml into the isolated home directory
    pub fn write_home_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.home_dir.join("config.toml");
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}
