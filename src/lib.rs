pub mod display;
pub mod matrix;
pub mod parallel;
pub mod scoring;
pub mod sequential;

pub use matrix::{create_matrix, DpMatrix};
pub use scoring::ScoringPolicy;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AlignError>;

/// Best cell of a local alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAlignment {
    pub score: f64,
    pub row: usize,
    pub col: usize,
}

impl std::fmt::Display for LocalAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Score: {} at ({}, {})", self.score, self.row, self.col)
    }
}

pub trait Aligner<'a> {
    type Output;

    fn with(x: &'a [u8], y: &'a [u8], policy: ScoringPolicy) -> Self;
    fn align(&self) -> Result<Self::Output>;
}

/// Smith-Waterman score and best cell of `x` against `y`.
pub fn local_align(x: &[u8], y: &[u8], policy: ScoringPolicy) -> Result<LocalAlignment> {
    sequential::LocalAligner::with(x, y, policy).align()
}

/// Gotoh global alignment score of `x` against `y`.
pub fn affine_align(x: &[u8], y: &[u8], policy: ScoringPolicy) -> Result<f64> {
    sequential::AffineAligner::with(x, y, policy).align()
}
