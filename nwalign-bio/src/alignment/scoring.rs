/// Linear scoring scheme for global alignment
use nwalign_core::ScoringConfig;

/// Match reward, mismatch penalty and per-symbol gap penalty.
///
/// Penalties are stored as signed values and added as-is: a gap costing one point is `gap = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl ScoringScheme {
    pub const fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Score for placing `a` against `b` in the same column
    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> i64 {
        if a == b {
            self.match_score as i64
        } else {
            self.mismatch as i64
        }
    }

    #[inline]
    pub fn gap(&self) -> i64 {
        self.gap as i64
    }

    pub fn with_match(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch(mut self, mismatch: i32) -> Self {
        self.mismatch = mismatch;
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(1, -1, 0)
    }
}

impl From<ScoringConfig> for ScoringScheme {
    fn from(config: ScoringConfig) -> Self {
        Self::new(config.match_score, config.mismatch, config.gap)
    }
}
