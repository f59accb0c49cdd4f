//! JSON records consumed and produced by the aligner
//!
//! Input:  `{"seq1": "...", "seq2": "...", "scoring_schema": {"match": 1, "mismatch": -1, "gap": 0}}`
//! Output: `{"seq1": "...", "seq2": "...", "score": 0, "matrix": [[0, ...], ...]}`

use crate::alignment::{AlignmentResult, ScoringScheme};
use nwalign_core::{NwalignError, NwalignResult};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::io;
use std::path::Path;
use tracing::info;

/// Scoring values as spelled in the input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSchema {
    #[serde(rename = "match")]
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl From<ScoringSchema> for ScoringScheme {
    fn from(schema: ScoringSchema) -> Self {
        ScoringScheme::new(schema.match_score, schema.mismatch, schema.gap)
    }
}

impl From<ScoringScheme> for ScoringSchema {
    fn from(scoring: ScoringScheme) -> Self {
        Self {
            match_score: scoring.match_score,
            mismatch: scoring.mismatch,
            gap: scoring.gap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentInput {
    pub seq1: String,
    pub seq2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_schema: Option<ScoringSchema>,
}

impl AlignmentInput {
    /// Scoring from the record, or `fallback` when the record carries none
    pub fn scoring_or(&self, fallback: ScoringScheme) -> ScoringScheme {
        self.scoring_schema.map(ScoringScheme::from).unwrap_or(fallback)
    }

    pub fn scoring(&self) -> ScoringScheme {
        self.scoring_or(ScoringScheme::default())
    }

    /// Both sequences split into Unicode scalar values
    pub fn symbols(&self) -> (Vec<char>, Vec<char>) {
        (self.seq1.chars().collect(), self.seq2.chars().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentOutput {
    pub seq1: String,
    pub seq2: String,
    pub score: i64,
    pub matrix: Vec<Vec<i64>>,
}

impl AlignmentOutput {
    pub fn from_result(result: &AlignmentResult<char>) -> Self {
        let (seq1, seq2) = result.alignment.to_strings();
        Self {
            seq1,
            seq2,
            score: result.score,
            matrix: result.matrix.to_rows(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> NwalignResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn classify(err: serde_json::Error) -> NwalignError {
    match err.classify() {
        // Well-formed JSON with the wrong shape
        Category::Data => NwalignError::Configuration(format!("Invalid input record: {}", err)),
        Category::Syntax | Category::Eof => {
            NwalignError::Parse(format!("Malformed JSON input: {}", err))
        }
        Category::Io => NwalignError::Io(std::io::Error::from(err)),
    }
}

/// Parse an input record from a JSON string
pub fn parse_input(json: &str) -> NwalignResult<AlignmentInput> {
    serde_json::from_str(json).map_err(classify)
}

/// Attach the offending path to a file system error
fn file_error(err: io::Error, action: &str, path: &Path) -> NwalignError {
    NwalignError::Io(io::Error::new(
        err.kind(),
        format!("Failed to {} {}: {}", action, path.display(), err),
    ))
}

/// Read an input record from a JSON file
pub fn read_input<P: AsRef<Path>>(path: P) -> NwalignResult<AlignmentInput> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            NwalignError::NotFound(format!("input file {}", path.display()))
        }
        _ => file_error(e, "read", path),
    })?;
    let input = parse_input(&contents)?;
    info!(
        "Read input record from {} ({} and {} symbols)",
        path.display(),
        input.seq1.chars().count(),
        input.seq2.chars().count()
    );
    Ok(input)
}

/// Write an output record as JSON
pub fn write_output<P: AsRef<Path>>(
    path: P,
    output: &AlignmentOutput,
    pretty: bool,
) -> NwalignResult<()> {
    let path = path.as_ref();
    std::fs::write(path, output.to_json(pretty)?).map_err(|e| file_error(e, "write", path))?;
    info!("Wrote alignment record to {}", path.display());
    Ok(())
}
