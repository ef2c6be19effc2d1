use std::fmt;

use crate::sequential::AffineMatrices;
use crate::{DpMatrix, ScoringPolicy};

/// Grid rendering of a filled matrix.
///
/// The symbols of `x` run across the top and those of `y` down the side, so
/// each printed line is one matrix column. `*` marks the boundary.
pub struct MatrixDisplay<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
    pub matrix: &'a DpMatrix,
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>5} {:>5}", " ", "*")?;
        for &c in self.x {
            write!(f, " {:>5}", c as char)?;
        }
        writeln!(f)?;

        for j in 0..self.matrix.cols() {
            let label = match j {
                0 => '*',
                _ => self.y.get(j - 1).map_or(' ', |&c| c as char),
            };
            write!(f, "{label:>5}")?;
            for i in 0..self.matrix.rows() {
                write!(f, " {:>5.0}", self.matrix[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Full printout of an affine run: inputs, scoring, the three state
/// matrices and the optimum.
pub struct AffineReport<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
    pub policy: &'a ScoringPolicy,
    pub matrices: &'a AffineMatrices,
}

impl fmt::Display for AffineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "x = {} & y = {}",
            String::from_utf8_lossy(self.x),
            String::from_utf8_lossy(self.y)
        )?;
        writeln!(f, "Scoring: {}", self.policy)?;
        let states = [
            ("M", &self.matrices.matched),
            ("X", &self.matrices.gap_x),
            ("Y", &self.matrices.gap_y),
        ];
        for (name, matrix) in states {
            writeln!(f, "{name} matrix =")?;
            let grid = MatrixDisplay {
                x: self.x,
                y: self.y,
                matrix,
            };
            write!(f, "{grid}")?;
        }
        writeln!(f, "Optimal = {}", self.matrices.optimal())
    }
}
