/// Aligned sequence pair and the result bundle returned by the aligner
use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::scoring::ScoringScheme;

/// Character used for gaps when an alignment is rendered as text
pub const GAP_CHAR: char = '-';

/// One position of an aligned sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignedSymbol<T> {
    Residue(T),
    Gap,
}

impl<T> AlignedSymbol<T> {
    pub fn is_gap(&self) -> bool {
        matches!(self, AlignedSymbol::Gap)
    }

    pub fn residue(&self) -> Option<&T> {
        match self {
            AlignedSymbol::Residue(symbol) => Some(symbol),
            AlignedSymbol::Gap => None,
        }
    }
}

/// Two equal-length aligned sequences; no column holds a gap on both sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    seq1: Vec<AlignedSymbol<T>>,
    seq2: Vec<AlignedSymbol<T>>,
}

impl<T> Alignment<T> {
    pub(crate) fn from_columns(seq1: Vec<AlignedSymbol<T>>, seq2: Vec<AlignedSymbol<T>>) -> Self {
        debug_assert_eq!(seq1.len(), seq2.len());
        debug_assert!(seq1.iter().zip(&seq2).all(|(a, b)| !(a.is_gap() && b.is_gap())));
        Self { seq1, seq2 }
    }

    pub fn seq1(&self) -> &[AlignedSymbol<T>] {
        &self.seq1
    }

    pub fn seq2(&self) -> &[AlignedSymbol<T>] {
        &self.seq2
    }

    pub fn columns(&self) -> impl Iterator<Item = (&AlignedSymbol<T>, &AlignedSymbol<T>)> {
        self.seq1.iter().zip(self.seq2.iter())
    }

    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Number of columns with a gap on either side
    pub fn gap_count(&self) -> usize {
        self.columns().filter(|(a, b)| a.is_gap() || b.is_gap()).count()
    }
}

impl<T: PartialEq> Alignment<T> {
    /// Rescore the aligned pair column by column.
    ///
    /// Equal residues score a match, a column with a gap scores the gap penalty, anything
    /// else a mismatch. This can be lower than [`ScoreMatrix::corner`] when the traceback
    /// prefers a symbol match over the arithmetically best neighbour.
    pub fn score(&self, scoring: &ScoringScheme) -> i64 {
        self.columns()
            .map(|column| match column {
                (AlignedSymbol::Residue(a), AlignedSymbol::Residue(b)) if a == b => {
                    scoring.match_score as i64
                }
                (AlignedSymbol::Gap, _) | (_, AlignedSymbol::Gap) => scoring.gap(),
                _ => scoring.mismatch as i64,
            })
            .sum()
    }

    /// Column markers: '|' for a match, 'X' for a mismatch, ' ' for a gap
    pub fn midline(&self) -> String {
        self.columns()
            .map(|column| match column {
                (AlignedSymbol::Residue(a), AlignedSymbol::Residue(b)) if a == b => '|',
                (AlignedSymbol::Residue(_), AlignedSymbol::Residue(_)) => 'X',
                _ => ' ',
            })
            .collect()
    }

    pub fn matches(&self) -> usize {
        self.columns()
            .filter(|column| {
                matches!(column, (AlignedSymbol::Residue(a), AlignedSymbol::Residue(b)) if a == b)
            })
            .count()
    }

    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }
}

impl<T: Clone> Alignment<T> {
    /// Both rows with every gap replaced by `gap`
    pub fn render_with(&self, gap: T) -> (Vec<T>, Vec<T>) {
        let render = |row: &[AlignedSymbol<T>]| -> Vec<T> {
            row.iter()
                .map(|symbol| match symbol {
                    AlignedSymbol::Residue(s) => s.clone(),
                    AlignedSymbol::Gap => gap.clone(),
                })
                .collect()
        };
        (render(&self.seq1), render(&self.seq2))
    }
}

impl Alignment<char> {
    /// Both rows as strings with [`GAP_CHAR`] for gaps
    pub fn to_strings(&self) -> (String, String) {
        let (seq1, seq2) = self.render_with(GAP_CHAR);
        (seq1.into_iter().collect(), seq2.into_iter().collect())
    }
}

impl Alignment<u8> {
    pub fn to_byte_strings(&self) -> (Vec<u8>, Vec<u8>) {
        self.render_with(GAP_CHAR as u8)
    }
}

/// Everything one alignment run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<T> {
    pub alignment: Alignment<T>,
    /// Column-wise rescore of `alignment`
    pub score: i64,
    pub matrix: ScoreMatrix,
}

impl<T> AlignmentResult<T> {
    /// Optimal score according to the filled matrix
    pub fn matrix_score(&self) -> i64 {
        self.matrix.corner()
    }

    pub fn score_matches_matrix(&self) -> bool {
        self.score == self.matrix_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AlignedSymbol::{Gap, Residue};

    fn sample() -> Alignment<u8> {
        // A C - T
        // A G T T
        Alignment::from_columns(
            vec![Residue(b'A'), Residue(b'C'), Gap, Residue(b'T')],
            vec![Residue(b'A'), Residue(b'G'), Residue(b'T'), Residue(b'T')],
        )
    }

    #[test]
    fn test_score_counts_each_column_kind() {
        let scoring = ScoringScheme::new(2, -3, -1);
        // 2 matches, 1 mismatch, 1 gap
        assert_eq!(sample().score(&scoring), 2 * 2 - 3 - 1);
    }

    #[test]
    fn test_midline_and_identity() {
        let alignment = sample();
        assert_eq!(alignment.midline(), "|X |");
        assert_eq!(alignment.matches(), 2);
        assert_eq!(alignment.gap_count(), 1);
        assert_eq!(alignment.identity(), 0.5);
    }

    #[test]
    fn test_render() {
        let (seq1, seq2) = sample().to_byte_strings();
        assert_eq!(seq1, b"AC-T");
        assert_eq!(seq2, b"AGTT");
    }

    #[test]
    fn test_gap_symbol_is_distinct_from_dash_residue() {
        // A literal '-' in the input is a residue and matches another '-'
        let alignment = Alignment::from_columns(vec![Residue('-'), Gap], vec![Residue('-'), Residue('A')]);
        let scoring = ScoringScheme::new(1, -1, -5);

        assert_eq!(alignment.score(&scoring), 1 - 5);
        assert_eq!(alignment.to_strings(), ("--".to_string(), "-A".to_string()));
    }

    #[test]
    fn test_empty_alignment() {
        let alignment: Alignment<char> = Alignment::from_columns(Vec::new(), Vec::new());

        assert!(alignment.is_empty());
        assert_eq!(alignment.score(&ScoringScheme::default()), 0);
        assert_eq!(alignment.identity(), 0.0);
        assert_eq!(alignment.midline(), "");
        assert_eq!(alignment.to_strings(), (String::new(), String::new()));
    }
}
