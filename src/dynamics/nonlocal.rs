//! Nonlocal slender-body model of the scallop.
//!
//! Only the upper filament's force balance is assembled. The lower filament is
//! its mirror image, so its force density is the mirrored upper density and its
//! balance holds by symmetry. Unknowns are ordered `[f_x(0), f_y(0), f_x(1), ..., U]`.

use std::f64::consts::PI;

use log::debug;
use nalgebra::{DMatrix, Matrix2, Vector2};

use crate::{
    config::setup::parameters::simulation::SimParams,
    error::Result,
    geometry::filament::{FilamentState, InteractionGeometry},
    numerics::{
        linalg::{add_block, expand, expand_and_scale, LinearSystem},
        quadrature::{clenshaw_curtis, QuadratureRule},
    },
};

use super::{
    stokes_solutions::{mirror_matrix, stokeslet_matrix},
    HydroModel,
};

const EIGHT_PI: f64 = 8.0 * PI;

pub struct NonlocalModel {
    params: SimParams,
    // Clenshaw-Curtis rule on [-1/2, 1/2].
    rule: QuadratureRule,
}

impl NonlocalModel {
    pub fn new(params: &SimParams) -> Result<Self> {
        params.validate()?;
        let rule = clenshaw_curtis(params.quadrature_order)?.rescale(-0.5, 0.5);
        Ok(NonlocalModel {
            params: params.clone(),
            rule,
        })
    }

    pub fn rule(&self) -> &QuadratureRule {
        &self.rule
    }

    pub fn n_points(&self) -> usize {
        self.rule.n_nodes()
    }

    pub fn filament_state(&self, t: f64) -> FilamentState {
        FilamentState::new(&self.params, &self.rule.nodes, t)
    }

    pub fn assemble_state(&self, state: &FilamentState) -> LinearSystem {
        let n = self.n_points();
        let ndim = 2 * n + 1;
        let u_col = ndim - 1;
        let weights = &self.rule.weights;
        let geometry = InteractionGeometry::new(state, self.params.regularization);
        let (i_plus, i_minus) = orientation_kernels(state.theta);

        let mut filament_block = self_interaction_block(&geometry.s_reg, &i_plus, weights);
        filament_block += self_correction_block(&geometry.s_reg, &i_plus, weights);
        filament_block += local_drag_block(n, &i_plus, &i_minus, self.params.slenderness);
        add_cross_interaction(&mut filament_block, &geometry, weights);

        let mut system = LinearSystem::zeros(ndim);
        system
            .operator
            .view_mut((0, 0), (2 * n, 2 * n))
            .copy_from(&filament_block);

        for (i, (s, w)) in state.arclength.iter().zip(weights.iter()).enumerate() {
            // Rigid translation enters every x-component balance.
            system.operator[(2 * i, u_col)] = -EIGHT_PI;
            // Net x-force vanishes.
            system.operator[(u_col, 2 * i)] = *w;

            let v = state.rotation_velocity(*s) * EIGHT_PI;
            system.rhs[2 * i] = v.x;
            system.rhs[2 * i + 1] = v.y;
        }
        system
    }
}

impl HydroModel for NonlocalModel {
    fn ndim(&self) -> usize {
        2 * self.n_points() + 1
    }

    fn assemble(&self, t: f64) -> LinearSystem {
        let state = self.filament_state(t);
        debug!(
            "nonlocal t={:.5} theta={:.6} theta_dot={:.6}",
            t, state.theta, state.theta_dot
        );
        self.assemble_state(&state)
    }
}

/// (I_plus, I_minus) = (I + t t^T, I - t t^T) for tangent t = (cos theta, sin theta).
pub fn orientation_kernels(theta: f64) -> (Matrix2<f64>, Matrix2<f64>) {
    let tangent = Vector2::new(theta.cos(), theta.sin());
    let tt = tangent * tangent.transpose();
    (Matrix2::identity() + tt, Matrix2::identity() - tt)
}

pub fn self_interaction_block(
    s_reg: &DMatrix<f64>,
    i_plus: &Matrix2<f64>,
    weights: &[f64],
) -> DMatrix<f64> {
    expand_and_scale(&s_reg.map(|d| 1.0 / d), i_plus, weights)
}

// Subtracts the weighted row sum on the diagonal, cancelling the self-contribution.
pub fn self_correction_block(
    s_reg: &DMatrix<f64>,
    i_plus: &Matrix2<f64>,
    weights: &[f64],
) -> DMatrix<f64> {
    let n = s_reg.nrows();
    let diagonal = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            -s_reg
                .row(i)
                .iter()
                .zip(weights.iter())
                .map(|(d, w)| w / d)
                .sum::<f64>()
        } else {
            0.0
        }
    });
    expand(&diagonal, i_plus)
}

pub fn local_drag_block(
    n: usize,
    i_plus: &Matrix2<f64>,
    i_minus: &Matrix2<f64>,
    slenderness: f64,
) -> DMatrix<f64> {
    expand(
        &DMatrix::identity(n, n),
        &(i_plus * slenderness + i_minus * 2.0),
    )
}

// Velocity induced on the upper filament by the mirrored force density on the lower one.
pub fn add_cross_interaction(
    m: &mut DMatrix<f64>,
    geometry: &InteractionGeometry,
    weights: &[f64],
) {
    let mirror = mirror_matrix();
    let n = geometry.cross_distance.nrows();
    for i in 0..n {
        for (j, w) in weights.iter().enumerate().take(n) {
            let r = Vector2::new(geometry.cross_rhat_x[(i, j)], geometry.cross_rhat_y[(i, j)])
                * geometry.cross_distance[(i, j)];
            add_block(m, i, j, &(stokeslet_matrix(r) * mirror * *w));
        }
    }
}
