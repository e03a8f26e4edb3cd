use std::f64::consts::PI;

use nalgebra::{Matrix2, Vector2};

// r is the vector pointing from the singularity to the point of interest.
// All kernels are the in-plane block of the three-dimensional solution; for
// sources and targets in the z = 0 plane the out-of-plane component decouples.

/// Stokeslet without the 1/(8 pi mu) prefactor: (I + r_hat r_hat^T) / |r|.
pub fn stokeslet_matrix(r: Vector2<f64>) -> Matrix2<f64> {
    let rm = r.magnitude();
    let r_hat = r / rm;
    (Matrix2::identity() + r_hat * r_hat.transpose()) / rm
}

/// Regularized Stokeslet with blob size `epsilon`, including the 1/(8 pi) prefactor.
pub fn stokeslet_reg_matrix(r: Vector2<f64>, epsilon: f64) -> Matrix2<f64> {
    let r_sq = r.magnitude_squared();
    let eps_sq = epsilon.powi(2);
    let r_reg_cubed = (r_sq + eps_sq).powf(1.5);
    (Matrix2::identity() * (r_sq + 2.0 * eps_sq) + r * r.transpose()) / (8.0 * PI * r_reg_cubed)
}

/// Reflection through the symmetry axis y = 0, applied to a force density.
pub fn mirror_matrix() -> Matrix2<f64> {
    Matrix2::new(1.0, 0.0, 0.0, -1.0)
}
