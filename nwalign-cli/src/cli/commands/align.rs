use crate::cli::commands::config::load_effective_config;
use crate::cli::output::success;
use crate::cli::report::print_text_report;
use anyhow::Result;
use clap::Args;
use nwalign_bio::alignment::{align, ScoringScheme};
use nwalign_bio::formats::{read_input, write_output, AlignmentInput, AlignmentOutput};
use nwalign_core::{Config, OutputFormat};
use std::path::PathBuf;

#[derive(Args)]
pub struct AlignArgs {
    /// JSON input record with seq1, seq2 and an optional scoring_schema
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the result record (seq1, seq2, score, matrix) to this file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format printed to stdout
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit the score matrix from the text report
    #[arg(long)]
    pub no_matrix: bool,

    /// Pretty-print the JSON written to OUTPUT
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (defaults to $NWALIGN_HOME/config.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the match score
    #[arg(long = "match", value_name = "SCORE", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Override the mismatch score
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Override the gap score
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub gap: Option<i32>,
}

impl AlignArgs {
    /// Config defaults, then the record's scoring_schema, then command-line flags
    fn resolve_scoring(&self, config: &Config, input: &AlignmentInput) -> ScoringScheme {
        let mut scoring = input.scoring_or(ScoringScheme::from(config.scoring));
        if let Some(value) = self.match_score {
            scoring = scoring.with_match(value);
        }
        if let Some(value) = self.mismatch {
            scoring = scoring.with_mismatch(value);
        }
        if let Some(value) = self.gap {
            scoring = scoring.with_gap(value);
        }
        scoring
    }
}

pub fn run(args: AlignArgs) -> Result<()> {
    let config = load_effective_config(args.config.as_deref())?;
    let format = match args.format {
        Some(format) => format,
        None => config.output.format.parse::<OutputFormat>()?,
    };

    let input = read_input(&args.input)?;
    let scoring = args.resolve_scoring(&config, &input);
    tracing::info!(
        "Aligning with match {}, mismatch {}, gap {}",
        scoring.match_score,
        scoring.mismatch,
        scoring.gap
    );

    let (seq1, seq2) = input.symbols();
    let result = align(&seq1, &seq2, scoring);
    let output = AlignmentOutput::from_result(&result);

    match format {
        OutputFormat::Text => {
            let show_matrix = config.output.show_matrix && !args.no_matrix;
            print_text_report(&input, scoring, &result, show_matrix);
        }
        OutputFormat::Json => println!("{}", output.to_json(true)?),
    }

    if let Some(path) = &args.output {
        write_output(path, &output, args.pretty || config.output.pretty_json)?;
        if !format.is_machine_readable() {
            success(&format!("Result written to {}", path.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwalign_bio::formats::parse_input;

    fn args() -> AlignArgs {
        AlignArgs {
            input: PathBuf::from("input.json"),
            output: None,
            format: None,
            no_matrix: false,
            pretty: false,
            config: None,
            match_score: None,
            mismatch: None,
            gap: None,
        }
    }

    #[test]
    fn test_config_scoring_when_record_has_none() {
        let mut config = Config::default();
        config.scoring.gap = -2;
        let input = parse_input(r#"{"seq1": "A", "seq2": "C"}"#).unwrap();

        assert_eq!(
            args().resolve_scoring(&config, &input),
            ScoringScheme::new(1, -1, -2)
        );
    }

    #[test]
    fn test_record_scoring_beats_config() {
        let mut config = Config::default();
        config.scoring.gap = -2;
        let input = parse_input(
            r#"{"seq1": "A", "seq2": "C", "scoring_schema": {"match": 2, "mismatch": -2, "gap": -1}}"#,
        )
        .unwrap();

        assert_eq!(
            args().resolve_scoring(&config, &input),
            ScoringScheme::new(2, -2, -1)
        );
    }

    #[test]
    fn test_flags_override_individual_values() {
        let input = parse_input(
            r#"{"seq1": "A", "seq2": "C", "scoring_schema": {"match": 2, "mismatch": -2, "gap": -1}}"#,
        )
        .unwrap();
        let mut args = args();
        args.gap = Some(-5);

        assert_eq!(
            args.resolve_scoring(&Config::default(), &input),
            ScoringScheme::new(2, -2, -5)
        );
    }
}
