pub mod matrix;
pub mod nw_aligner;
pub mod scoring;
pub mod traceback;
pub mod types;

pub use matrix::ScoreMatrix;
pub use nw_aligner::{align, NeedlemanWunsch};
pub use scoring::ScoringScheme;
pub use traceback::{traceback, Step};
pub use types::{AlignedSymbol, Alignment, AlignmentResult, GAP_CHAR};
