use log::debug;
use nalgebra::{DMatrix, DVector, Matrix2};

use crate::error::{Result, ScallopError};

/// Dense square system `operator * x = rhs`.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub operator: DMatrix<f64>,
    pub rhs: DVector<f64>,
}

impl LinearSystem {
    pub fn zeros(ndim: usize) -> Self {
        LinearSystem {
            operator: DMatrix::zeros(ndim, ndim),
            rhs: DVector::zeros(ndim),
        }
    }

    pub fn ndim(&self) -> usize {
        self.rhs.len()
    }

    pub fn solve(&self) -> Result<DVector<f64>> {
        solve_dense(&self.operator, &self.rhs)
    }
}

/// Block expansion of a scalar kernel against a fixed 2x2 kernel:
/// block (i, j) of the result is `scalar[(i, j)] * kernel`.
pub fn expand(scalar: &DMatrix<f64>, kernel: &Matrix2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(2 * scalar.nrows(), 2 * scalar.ncols(), |row, col| {
        scalar[(row / 2, col / 2)] * kernel[(row % 2, col % 2)]
    })
}

/// As `expand`, then scale each column by the weight of its source point.
pub fn expand_and_scale(
    scalar: &DMatrix<f64>,
    kernel: &Matrix2<f64>,
    weights: &[f64],
) -> DMatrix<f64> {
    let mut m = expand(scalar, kernel);
    for (col, mut column) in m.column_iter_mut().enumerate() {
        column *= weights[col / 2];
    }
    m
}

/// Add `block` into the 2x2 sub-block of `m` owned by points (i, j).
pub fn add_block(m: &mut DMatrix<f64>, i: usize, j: usize, block: &Matrix2<f64>) {
    let mut view = m.fixed_view_mut::<2, 2>(2 * i, 2 * j);
    view += block;
}

pub fn solve_dense(operator: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>> {
    if !operator.is_square() || operator.nrows() != rhs.len() {
        return Err(ScallopError::Numerical(format!(
            "Operator of shape {}x{} does not match right-hand side of length {}",
            operator.nrows(),
            operator.ncols(),
            rhs.len()
        )));
    }
    let lu = operator.clone().lu();
    // Pivots below roundoff of the largest one mean rank deficiency.
    let pivots = lu.u().diagonal().abs();
    let (min_pivot, max_pivot) = (pivots.min(), pivots.max());
    if !(min_pivot > operator.nrows() as f64 * f64::EPSILON * max_pivot) {
        return Err(ScallopError::Numerical(format!(
            "Operator is singular to working precision (pivots in [{:e}, {:e}])",
            min_pivot, max_pivot
        )));
    }
    let x = lu
        .solve(rhs)
        .ok_or_else(|| ScallopError::Numerical("Operator is singular".to_string()))?;
    if x.iter().any(|v| !v.is_finite()) {
        return Err(ScallopError::Numerical(
            "Solution contains non-finite values".to_string(),
        ));
    }
    debug!("Solved {}-dimensional system", x.len());
    Ok(x)
}
