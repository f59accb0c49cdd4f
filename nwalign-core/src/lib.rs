//! Core utilities and types shared across all nwalign crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{default_config, load_config, save_config, Config, OutputConfig, ScoringConfig};
pub use error::{NwalignError, NwalignResult};
pub use types::OutputFormat;

// Re-export system utilities
pub use system::{default_config_path, nwalign_home};
