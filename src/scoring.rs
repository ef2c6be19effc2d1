use std::fmt;

/// Flat match/mismatch scoring with separate gap-open and gap-extend terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub gap_open: f64,
    pub gap_extend: f64,
    pub match_score: f64,
    pub mismatch_score: f64,
}

impl ScoringPolicy {
    pub const fn new(gap_open: f64, gap_extend: f64, match_score: f64, mismatch_score: f64) -> Self {
        Self {
            gap_open,
            gap_extend,
            match_score,
            mismatch_score,
        }
    }

    /// Smith-Waterman defaults. `gap_open` is unused by the local engine.
    pub const fn local_default() -> Self {
        Self::new(0.0, -7.0, 10.0, -5.0)
    }

    pub const fn affine_default() -> Self {
        Self::new(-15.0, -7.0, 10.0, -2.0)
    }

    pub fn with_gap_open(mut self, gap_open: f64) -> Self {
        self.gap_open = gap_open;
        self
    }

    pub fn with_gap_extend(mut self, gap_extend: f64) -> Self {
        self.gap_extend = gap_extend;
        self
    }

    pub fn with_match(mut self, match_score: f64) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch(mut self, mismatch_score: f64) -> Self {
        self.mismatch_score = mismatch_score;
        self
    }

    #[inline]
    pub fn substitution_score(&self, a: u8, b: u8) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // integer formatting truncates toward zero
        write!(
            f,
            "match = {}; mismatch = {}; gap_start = {}; gap_extend = {}",
            self.match_score as i64,
            self.mismatch_score as i64,
            self.gap_open as i64,
            self.gap_extend as i64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_score_is_flat() {
        let policy = ScoringPolicy::local_default();
        assert_eq!(policy.substitution_score(b'A', b'A'), 10.0);
        assert_eq!(policy.substitution_score(b'A', b'C'), -5.0);
        assert_eq!(policy.substitution_score(b'-', b'-'), 10.0);
    }

    #[test]
    fn summary_uses_integer_formatting() {
        let policy = ScoringPolicy::new(-15.0, -7.0, 30.0, -5.0);
        assert_eq!(
            policy.to_string(),
            "match = 30; mismatch = -5; gap_start = -15; gap_extend = -7"
        );
        let fractional = ScoringPolicy::new(-1.5, -0.5, 2.9, -2.9);
        assert_eq!(
            fractional.to_string(),
            "match = 2; mismatch = -2; gap_start = -1; gap_extend = 0"
        );
    }

    #[test]
    fn builders_return_modified_copies() {
        let base = ScoringPolicy::affine_default();
        let tuned = base.with_match(30.0).with_mismatch(-5.0);
        assert_eq!(base.match_score, 10.0);
        assert_eq!(tuned, ScoringPolicy::new(-15.0, -7.0, 30.0, -5.0));
        assert_eq!(
            base.with_gap_open(0.0).with_gap_extend(-1.0),
            ScoringPolicy::new(0.0, -1.0, 10.0, -2.0)
        );
    }
}
