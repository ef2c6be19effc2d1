use log::debug;

use crate::{Aligner, DpMatrix, LocalAlignment, Result, ScoringPolicy};

pub struct LocalAligner<'a> {
    x: &'a [u8],
    y: &'a [u8],
    policy: ScoringPolicy,
}

/// Filled Smith-Waterman matrix together with its best cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFill {
    pub matrix: DpMatrix,
    pub best: LocalAlignment,
}

impl<'a> Aligner<'a> for LocalAligner<'a> {
    type Output = LocalAlignment;

    fn with(x: &'a [u8], y: &'a [u8], policy: ScoringPolicy) -> Self {
        LocalAligner { x, y, policy }
    }

    fn align(&self) -> Result<LocalAlignment> {
        Ok(self.fill()?.best)
    }
}

impl<'a> LocalAligner<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self::with(x, y, ScoringPolicy::local_default())
    }

    pub fn fill(&self) -> Result<LocalFill> {
        let mut matrix = DpMatrix::zeros(self.x.len() + 1, self.y.len() + 1)?;
        let mut best = LocalAlignment {
            score: 0.0,
            row: 0,
            col: 0,
        };
        for i in 1..=self.x.len() {
            for j in 1..=self.y.len() {
                let score = local_cell(&matrix, self.x, self.y, &self.policy, i, j);
                matrix[(i, j)] = score;
                // ties move the optimum to the later cell
                if score >= best.score {
                    best = LocalAlignment {
                        score,
                        row: i,
                        col: j,
                    };
                }
            }
        }
        debug!(
            "local fill {}x{}: best {} at ({}, {})",
            matrix.rows(),
            matrix.cols(),
            best.score,
            best.row,
            best.col
        );
        Ok(LocalFill { matrix, best })
    }
}

/// Smith-Waterman recurrence for cell `(i, j)`, `i, j >= 1`.
#[inline]
pub(crate) fn local_cell(
    a: &DpMatrix,
    x: &[u8],
    y: &[u8],
    policy: &ScoringPolicy,
    i: usize,
    j: usize,
) -> f64 {
    (a[(i, j - 1)] + policy.gap_extend)
        .max(a[(i - 1, j)] + policy.gap_extend)
        .max(a[(i - 1, j - 1)] + policy.substitution_score(x[i - 1], y[j - 1]))
        .max(0.0)
}

pub struct AffineAligner<'a> {
    x: &'a [u8],
    y: &'a [u8],
    policy: ScoringPolicy,
}

/// The three Gotoh state matrices.
///
/// `matched` ends in a substitution, `gap_x` in a gap opposite `y[j-1]`,
/// `gap_y` in a gap opposite `x[i-1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMatrices {
    pub matched: DpMatrix,
    pub gap_x: DpMatrix,
    pub gap_y: DpMatrix,
}

impl AffineMatrices {
    /// Allocates the matrices for sequences of length `m` and `n` and writes
    /// the boundary rows. `[0][0]` stays 0 in all three.
    pub(crate) fn with_boundaries(m: usize, n: usize, policy: &ScoringPolicy) -> Result<Self> {
        let mut matched = DpMatrix::zeros(m + 1, n + 1)?;
        let mut gap_x = DpMatrix::zeros(m + 1, n + 1)?;
        let mut gap_y = DpMatrix::zeros(m + 1, n + 1)?;
        for i in 1..=m {
            matched[(i, 0)] = f64::NEG_INFINITY;
            gap_x[(i, 0)] = f64::NEG_INFINITY;
            gap_y[(i, 0)] = policy.gap_open + i as f64 * policy.gap_extend;
        }
        for j in 1..=n {
            matched[(0, j)] = f64::NEG_INFINITY;
            gap_x[(0, j)] = policy.gap_open + j as f64 * policy.gap_extend;
            gap_y[(0, j)] = f64::NEG_INFINITY;
        }
        Ok(AffineMatrices {
            matched,
            gap_x,
            gap_y,
        })
    }

    pub(crate) fn store(&mut self, i: usize, j: usize, (m, x, y): (f64, f64, f64)) {
        self.matched[(i, j)] = m;
        self.gap_x[(i, j)] = x;
        self.gap_y[(i, j)] = y;
    }

    /// Best score over the three states of the final cell.
    pub fn optimal(&self) -> f64 {
        let (i, j) = (self.matched.rows() - 1, self.matched.cols() - 1);
        self.matched[(i, j)]
            .max(self.gap_x[(i, j)])
            .max(self.gap_y[(i, j)])
    }
}

impl<'a> Aligner<'a> for AffineAligner<'a> {
    type Output = f64;

    fn with(x: &'a [u8], y: &'a [u8], policy: ScoringPolicy) -> Self {
        AffineAligner { x, y, policy }
    }

    fn align(&self) -> Result<f64> {
        Ok(self.fill()?.optimal())
    }
}

impl<'a> AffineAligner<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self::with(x, y, ScoringPolicy::affine_default())
    }

    pub fn fill(&self) -> Result<AffineMatrices> {
        let mut mats = AffineMatrices::with_boundaries(self.x.len(), self.y.len(), &self.policy)?;
        for i in 1..=self.x.len() {
            for j in 1..=self.y.len() {
                let cell = affine_cell(&mats, self.x, self.y, &self.policy, i, j);
                mats.store(i, j, cell);
            }
        }
        debug!(
            "affine fill {}x{}: optimal {}",
            self.x.len() + 1,
            self.y.len() + 1,
            mats.optimal()
        );
        Ok(mats)
    }
}

/// Gotoh recurrence for cell `(i, j)`, `i, j >= 1`, as `(M, X, Y)`.
#[inline]
pub(crate) fn affine_cell(
    mats: &AffineMatrices,
    x: &[u8],
    y: &[u8],
    policy: &ScoringPolicy,
    i: usize,
    j: usize,
) -> (f64, f64, f64) {
    let (m, gx, gy) = (&mats.matched, &mats.gap_x, &mats.gap_y);
    let open = policy.gap_open + policy.gap_extend;
    let ext = policy.gap_extend;

    let matched = policy.substitution_score(x[i - 1], y[j - 1])
        + m[(i - 1, j - 1)]
            .max(gx[(i - 1, j - 1)])
            .max(gy[(i - 1, j - 1)]);
    let gap_x = (open + m[(i, j - 1)])
        .max(ext + gx[(i, j - 1)])
        .max(open + gy[(i, j - 1)]);
    let gap_y = (open + m[(i - 1, j)])
        .max(open + gx[(i - 1, j)])
        .max(ext + gy[(i - 1, j)]);
    (matched, gap_x, gap_y)
}
