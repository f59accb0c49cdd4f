use std::path::PathBuf;

/// Get the nwalign home directory
/// Checks NWALIGN_HOME environment variable, falls back to ${HOME}/.nwalign
///
/// Not cached: tests and subprocesses point NWALIGN_HOME at temporary directories.
pub fn nwalign_home() -> PathBuf {
    if let Ok(path) = std::env::var("NWALIGN_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".nwalign")
    }
}

/// Location of the user configuration file, `<home>/config.toml`
pub fn default_config_path() -> PathBuf {
    nwalign_home().join("config.toml")
}
