//! Configuration types for nwalign

use crate::NwalignError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scoring values used when neither the input record nor the command line supplies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_match_score")]
    pub match_score: i32,
    #[serde(default = "default_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_gap")]
    pub gap: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_show_matrix")]
    pub show_matrix: bool,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

// Default value functions
fn default_match_score() -> i32 { 1 }
fn default_mismatch() -> i32 { -1 }
fn default_gap() -> i32 { 0 }
fn default_format() -> String { "text".to_string() }
fn default_show_matrix() -> bool { true }
fn default_pretty_json() -> bool { false }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch: default_mismatch(),
            gap: default_gap(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_matrix: default_show_matrix(),
            pretty_json: default_pretty_json(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, NwalignError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            NwalignError::NotFound(format!("config file {}", path.display()))
        }
        _ => e.into(),
    })?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| NwalignError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), NwalignError> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)
        .map_err(|e| NwalignError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents).map_err(|e| {
        NwalignError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    })?;
    Ok(())
}
