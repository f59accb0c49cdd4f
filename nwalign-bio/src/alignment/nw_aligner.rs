/// Needleman-Wunsch global alignment algorithm
use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::scoring::ScoringScheme;
use crate::alignment::traceback::traceback;
use crate::alignment::types::AlignmentResult;
use tracing::debug;

pub struct NeedlemanWunsch {
    scoring: ScoringScheme,
}

impl NeedlemanWunsch {
    pub fn new(scoring: ScoringScheme) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    /// Globally align `seq1` against `seq2`.
    ///
    /// Symbols are opaque and compared only for equality. Never fails; either or both
    /// sequences may be empty.
    pub fn align<T: PartialEq + Clone>(&self, seq1: &[T], seq2: &[T]) -> AlignmentResult<T> {
        debug!(
            seq1_len = seq1.len(),
            seq2_len = seq2.len(),
            "Building {}x{} score matrix",
            seq1.len() + 1,
            seq2.len() + 1
        );

        let mut matrix = ScoreMatrix::with_boundaries(seq1.len(), seq2.len(), &self.scoring);
        matrix.fill(seq1, seq2, &self.scoring);

        let alignment = traceback(&matrix, seq1, seq2);
        let score = alignment.score(&self.scoring);

        if score != matrix.corner() {
            debug!(
                score,
                matrix_score = matrix.corner(),
                "Traceback path scores differently from the matrix optimum"
            );
        }

        AlignmentResult {
            alignment,
            score,
            matrix,
        }
    }
}

impl Default for NeedlemanWunsch {
    fn default() -> Self {
        Self::new(ScoringScheme::default())
    }
}

/// Globally align two sequences with the given scoring scheme
pub fn align<T: PartialEq + Clone>(
    seq1: &[T],
    seq2: &[T],
    scoring: ScoringScheme,
) -> AlignmentResult<T> {
    NeedlemanWunsch::new(scoring).align(seq1, seq2)
}
