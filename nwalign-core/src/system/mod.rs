pub mod paths;

// Re-export commonly used functions
pub use paths::{default_config_path, nwalign_home};
