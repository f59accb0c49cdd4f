/// Traceback through a filled score matrix
use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::types::{AlignedSymbol, Alignment};

/// Move taken from cell (i, j) during traceback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Consume one symbol of each sequence
    Diagonal,
    /// Consume a symbol of the first sequence against a gap, from (i-1, j)
    Left,
    /// Consume a symbol of the second sequence against a gap, from (i, j-1)
    Up,
}

impl Step {
    /// Pick the step out of cell (i, j) given its three predecessors.
    ///
    /// Checked in order: diagonal, left, up. Matching symbols always step diagonally,
    /// even when `diag` is below `left` or `up`.
    pub fn choose(symbols_match: bool, diag: i64, left: i64, up: i64) -> Self {
        if symbols_match || (diag >= up && diag >= left) {
            Step::Diagonal
        } else if left >= up && left >= diag {
            Step::Left
        } else {
            // Reaching here implies up >= left and up > diag
            debug_assert!(up >= left && up >= diag);
            Step::Up
        }
    }
}

/// Rebuild one alignment by walking `matrix` from (m, n) back to the origin
pub fn traceback<T: PartialEq + Clone>(
    matrix: &ScoreMatrix,
    seq1: &[T],
    seq2: &[T],
) -> Alignment<T> {
    let capacity = seq1.len().max(seq2.len());
    let mut aligned1 = Vec::with_capacity(capacity);
    let mut aligned2 = Vec::with_capacity(capacity);

    let mut i = seq1.len();
    let mut j = seq2.len();

    while i > 0 && j > 0 {
        let diag = matrix.get(i - 1, j - 1);
        let left = matrix.get(i - 1, j);
        let up = matrix.get(i, j - 1);

        match Step::choose(seq1[i - 1] == seq2[j - 1], diag, left, up) {
            Step::Diagonal => {
                aligned1.push(AlignedSymbol::Residue(seq1[i - 1].clone()));
                aligned2.push(AlignedSymbol::Residue(seq2[j - 1].clone()));
                i -= 1;
                j -= 1;
            }
            Step::Left => {
                aligned1.push(AlignedSymbol::Residue(seq1[i - 1].clone()));
                aligned2.push(AlignedSymbol::Gap);
                i -= 1;
            }
            Step::Up => {
                aligned1.push(AlignedSymbol::Gap);
                aligned2.push(AlignedSymbol::Residue(seq2[j - 1].clone()));
                j -= 1;
            }
        }
    }

    // Whatever is left of either sequence is aligned against gaps
    while i > 0 {
        aligned1.push(AlignedSymbol::Residue(seq1[i - 1].clone()));
        aligned2.push(AlignedSymbol::Gap);
        i -= 1;
    }

    while j > 0 {
        aligned1.push(AlignedSymbol::Gap);
        aligned2.push(AlignedSymbol::Residue(seq2[j - 1].clone()));
        j -= 1;
    }

    aligned1.reverse();
    aligned2.reverse();

    Alignment::from_columns(aligned1, aligned2)
}
