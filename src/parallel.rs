//! Anti-diagonal (wavefront) fills of the same recurrences.
//!
//! Every cell on diagonal `i + j = d` depends only on diagonals `d - 1` and
//! `d - 2`, so a whole diagonal is computed on the rayon pool from a shared
//! borrow of the matrices and written back before the next one starts.

use log::{debug, trace};
use rayon::prelude::*;

use crate::sequential::{affine_cell, local_cell, AffineMatrices, LocalFill};
use crate::{Aligner, DpMatrix, LocalAlignment, Result, ScoringPolicy};

const DEFAULT_MIN_PARALLEL_DIAGONAL: usize = 256;

/// Interior cells `(i, d - i)` of diagonal `d`, as an inclusive row range.
fn diagonal_rows(d: usize, m: usize, n: usize) -> (usize, usize) {
    let lo = d.saturating_sub(n).max(1);
    let hi = (d - 1).min(m);
    (lo, hi)
}

fn compute_diagonal<T, F>(lo: usize, hi: usize, min_parallel: usize, cell: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if hi + 1 - lo < min_parallel {
        (lo..=hi).map(cell).collect()
    } else {
        (lo..=hi).into_par_iter().map(cell).collect()
    }
}

pub struct ParallelLocalAligner<'a> {
    x: &'a [u8],
    y: &'a [u8],
    policy: ScoringPolicy,
    min_parallel_diagonal: usize,
}

impl<'a> Aligner<'a> for ParallelLocalAligner<'a> {
    type Output = LocalAlignment;

    fn with(x: &'a [u8], y: &'a [u8], policy: ScoringPolicy) -> Self {
        ParallelLocalAligner {
            x,
            y,
            policy,
            min_parallel_diagonal: DEFAULT_MIN_PARALLEL_DIAGONAL,
        }
    }

    fn align(&self) -> Result<LocalAlignment> {
        Ok(self.fill()?.best)
    }
}

impl<'a> ParallelLocalAligner<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self::with(x, y, ScoringPolicy::local_default())
    }

    /// Diagonals with fewer interior cells than `len` are filled inline.
    pub fn with_min_parallel_diagonal(mut self, len: usize) -> Self {
        self.min_parallel_diagonal = len.max(1);
        self
    }

    pub fn fill(&self) -> Result<LocalFill> {
        let (m, n) = (self.x.len(), self.y.len());
        let mut matrix = DpMatrix::zeros(m + 1, n + 1)?;
        if m > 0 && n > 0 {
            for d in 2..=m + n {
                let (lo, hi) = diagonal_rows(d, m, n);
                trace!("local diagonal {d}: rows {lo}..={hi}");
                let scores = compute_diagonal(lo, hi, self.min_parallel_diagonal, |i| {
                    local_cell(&matrix, self.x, self.y, &self.policy, i, d - i)
                });
                for (i, score) in (lo..=hi).zip(scores) {
                    matrix[(i, d - i)] = score;
                }
            }
        }
        let best = best_cell(&matrix);
        debug!(
            "wavefront local fill {}x{}: best {} at ({}, {})",
            matrix.rows(),
            matrix.cols(),
            best.score,
            best.row,
            best.col
        );
        Ok(LocalFill { matrix, best })
    }
}

/// Row-major scan with the same `>=` update the sequential fill uses.
fn best_cell(matrix: &DpMatrix) -> LocalAlignment {
    let mut best = LocalAlignment {
        score: 0.0,
        row: 0,
        col: 0,
    };
    for i in 1..matrix.rows() {
        for (j, &score) in matrix.row(i).iter().enumerate().skip(1) {
            if score >= best.score {
                best = LocalAlignment {
                    score,
                    row: i,
                    col: j,
                };
            }
        }
    }
    best
}

pub struct ParallelAffineAligner<'a> {
    x: &'a [u8],
    y: &'a [u8],
    policy: ScoringPolicy,
    min_parallel_diagonal: usize,
}

impl<'a> Aligner<'a> for ParallelAffineAligner<'a> {
    type Output = f64;

    fn with(x: &'a [u8], y: &'a [u8], policy: ScoringPolicy) -> Self {
        ParallelAffineAligner {
            x,
            y,
            policy,
            min_parallel_diagonal: DEFAULT_MIN_PARALLEL_DIAGONAL,
        }
    }

    fn align(&self) -> Result<f64> {
        Ok(self.fill()?.optimal())
    }
}

impl<'a> ParallelAffineAligner<'a> {
    pub fn new(x: &'a [u8], y: &'a [u8]) -> Self {
        Self::with(x, y, ScoringPolicy::affine_default())
    }

    pub fn with_min_parallel_diagonal(mut self, len: usize) -> Self {
        self.min_parallel_diagonal = len.max(1);
        self
    }

    pub fn fill(&self) -> Result<AffineMatrices> {
        let (m, n) = (self.x.len(), self.y.len());
        let mut mats = AffineMatrices::with_boundaries(m, n, &self.policy)?;
        if m > 0 && n > 0 {
            for d in 2..=m + n {
                let (lo, hi) = diagonal_rows(d, m, n);
                trace!("affine diagonal {d}: rows {lo}..={hi}");
                let cells = compute_diagonal(lo, hi, self.min_parallel_diagonal, |i| {
                    affine_cell(&mats, self.x, self.y, &self.policy, i, d - i)
                });
                for (i, cell) in (lo..=hi).zip(cells) {
                    mats.store(i, d - i, cell);
                }
            }
        }
        debug!(
            "wavefront affine fill {}x{}: optimal {}",
            m + 1,
            n + 1,
            mats.optimal()
        );
        Ok(mats)
    }
}
