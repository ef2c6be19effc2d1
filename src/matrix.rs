use std::ops::{Index, IndexMut};

use crate::{AlignError, Result};

/// Dense row-major score grid. Row and column 0 hold the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DpMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Zero-filled `rows x cols` matrix. Negative dimensions are rejected.
pub fn create_matrix(rows: i64, cols: i64) -> Result<DpMatrix> {
    let rows = usize::try_from(rows)
        .map_err(|_| AlignError::InvalidArgument(format!("negative row count: {rows}")))?;
    let cols = usize::try_from(cols)
        .map_err(|_| AlignError::InvalidArgument(format!("negative column count: {cols}")))?;
    DpMatrix::zeros(rows, cols)
}

impl DpMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let len = rows.checked_mul(cols).ok_or_else(|| {
            AlignError::InvalidArgument(format!("matrix of {rows} x {cols} cells is too large"))
        })?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Largest cell, or `None` for an empty matrix.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}

impl Index<(usize, usize)> for DpMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DpMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}
