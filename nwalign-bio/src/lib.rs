//! Needleman-Wunsch global alignment engine and its record formats

pub mod alignment;
pub mod formats;

// Re-export commonly used types
pub use alignment::{
    align, AlignedSymbol, Alignment, AlignmentResult, NeedlemanWunsch, ScoreMatrix, ScoringScheme,
};
pub use formats::{parse_input, read_input, write_output, AlignmentInput, AlignmentOutput, ScoringSchema};
