use crate::cli::output::{section_header, success, tree_item, warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use nwalign_core::{
    default_config, default_config_path, load_config, save_config, Config, NwalignError,
};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with the built-in defaults
    Init(InitArgs),

    /// Show the configuration nwalign would use
    Show(ShowArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the file (defaults to $NWALIGN_HOME/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Configuration file to read instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show(args) => run_show(args),
    }
}

/// `--config PATH` if given, else the default file when it exists, else built-in defaults
pub fn load_effective_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Ok(load_config(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(load_config(&default_path)?)
    } else {
        Ok(default_config())
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(default_config_path);

    if path.exists() && !args.force {
        warning(&format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ));
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(NwalignError::Io)?;
    }
    save_config(&path, &default_config())?;

    success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let source = match &args.config {
        Some(path) => path.display().to_string(),
        None if default_config_path().exists() => default_config_path().display().to_string(),
        None => "built-in defaults".to_string(),
    };
    let config = load_effective_config(args.config.as_deref())?;

    section_header("Configuration");
    tree_item(true, "Source", Some(&source));

    section_header("Scoring");
    tree_item(false, "match_score", Some(&config.scoring.match_score.to_string()));
    tree_item(false, "mismatch", Some(&config.scoring.mismatch.to_string()));
    tree_item(true, "gap", Some(&config.scoring.gap.to_string()));

    section_header("Output");
    tree_item(false, "format", Some(&config.output.format));
    tree_item(false, "show_matrix", Some(&config.output.show_matrix.to_string()));
    tree_item(true, "pretty_json", Some(&config.output.pretty_json.to_string()));

    Ok(())
}
