pub mod commands;
pub mod output;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nwalign",
    version,
    about = "Global pairwise alignment with the Needleman-Wunsch algorithm",
    long_about = "Global pairwise alignment with the Needleman-Wunsch algorithm.\n\n\
                  nwalign reads two sequences and a scoring scheme from a JSON record, computes an \
                  optimal global alignment, prints the alignment with its score and full score \
                  matrix, and optionally writes the result as a JSON record."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align the two sequences of a JSON input record
    Align(commands::align::AlignArgs),

    /// Create or inspect the configuration file
    Config(commands::config::ConfigArgs),
}
