/// Dense dynamic-programming score matrix
use crate::alignment::scoring::ScoringScheme;

/// (m+1)×(n+1) grid of prefix alignment scores, stored row-major in one buffer.
///
/// Cell (i, j) is the best score of the first `i` symbols of the first sequence against the
/// first `j` symbols of the second. Memory is O(m·n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Zero-filled matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Matrix for sequences of length `m` and `n` with the gap-accumulated first row and column
    pub fn with_boundaries(m: usize, n: usize, scoring: &ScoringScheme) -> Self {
        let mut matrix = Self::new(m + 1, n + 1);
        let gap = scoring.gap();

        for i in 1..=m {
            let above = matrix.get(i - 1, 0);
            matrix.set(i, 0, above + gap);
        }

        for j in 1..=n {
            let before = matrix.get(0, j - 1);
            matrix.set(0, j, before + gap);
        }

        matrix
    }

    /// Fill every interior cell from its diagonal, upper and left neighbours.
    ///
    /// Expects a matrix built by [`ScoreMatrix::with_boundaries`] for the same sequences.
    pub fn fill<T: PartialEq>(&mut self, seq1: &[T], seq2: &[T], scoring: &ScoringScheme) {
        debug_assert_eq!(self.rows, seq1.len() + 1);
        debug_assert_eq!(self.cols, seq2.len() + 1);

        let gap = scoring.gap();

        for i in 1..=seq1.len() {
            for j in 1..=seq2.len() {
                let substitution =
                    self.get(i - 1, j - 1) + scoring.substitution(&seq1[i - 1], &seq2[j - 1]);
                let delete = self.get(i - 1, j) + gap;
                let insert = self.get(i, j - 1) + gap;

                self.set(i, j, substitution.max(delete).max(insert));
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.cols + col] = value;
    }

    /// Score of the full alignment, cell (m, n)
    pub fn corner(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.cols)
    }

    /// Nested copy of the grid, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}
