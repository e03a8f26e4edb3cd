//! Regularized-Stokeslet boundary-element model of the scallop.
//!
//! Each filament is cut into equal straight elements carrying a constant force
//! density, integrated with Gauss-Legendre points and collocated at the element
//! midpoints. As in the nonlocal model, only the upper filament is solved for and
//! the lower filament carries the mirrored density.

use log::debug;
use nalgebra::Matrix2;

use crate::{
    config::setup::{model::BoundaryElementConfig, parameters::simulation::SimParams},
    error::{Result, ScallopError},
    geometry::{
        filament::{Filament, FilamentState},
        linspace, midpoints,
    },
    numerics::{
        linalg::{add_block, LinearSystem},
        quadrature::{gauss_legendre, QuadratureRule},
    },
};

use super::{
    stokes_solutions::{mirror_matrix, stokeslet_reg_matrix},
    HydroModel,
};

pub struct BoundaryElementModel {
    params: SimParams,
    // Collocation points, one per element.
    s_mid: Vec<f64>,
    // Element length.
    ds: f64,
    // Gauss-Legendre rule rescaled onto each element.
    element_rules: Vec<QuadratureRule>,
}

impl BoundaryElementModel {
    pub fn new(params: &SimParams, config: &BoundaryElementConfig) -> Result<Self> {
        params.validate()?;
        if config.segments < 1 {
            return Err(ScallopError::Configuration(format!(
                "Boundary-element model needs at least one segment, got {}",
                config.segments
            )));
        }
        let reference = gauss_legendre(config.gauss_points)?;
        let edges = linspace(-0.5, 0.5, config.segments + 1);
        let element_rules = edges
            .windows(2)
            .map(|e| reference.rescale(e[0], e[1]))
            .collect();
        Ok(BoundaryElementModel {
            params: params.clone(),
            s_mid: midpoints(&edges),
            ds: 1.0 / config.segments as f64,
            element_rules,
        })
    }

    pub fn segments(&self) -> usize {
        self.s_mid.len()
    }

    pub fn element_length(&self) -> f64 {
        self.ds
    }

    pub fn filament_state(&self, t: f64) -> FilamentState {
        FilamentState::new(&self.params, &self.s_mid, t)
    }

    pub fn assemble_state(&self, state: &FilamentState) -> LinearSystem {
        let n = self.segments();
        let ndim = 2 * n + 1;
        let u_col = ndim - 1;
        let epsilon = self.params.filament_radius;
        let mirror = mirror_matrix();

        let mut system = LinearSystem::zeros(ndim);
        for (i, target) in state.r1.iter().enumerate() {
            for (j, rule) in self.element_rules.iter().enumerate() {
                let mut upper = Matrix2::zeros();
                let mut lower = Matrix2::zeros();
                for (s, w) in rule.nodes.iter().zip(rule.weights.iter()) {
                    let r_upper = *target - state.position(Filament::Upper, *s);
                    let r_lower = *target - state.position(Filament::Lower, *s);
                    upper += stokeslet_reg_matrix(r_upper, epsilon) * *w;
                    lower += stokeslet_reg_matrix(r_lower, epsilon) * *w;
                }
                add_block(&mut system.operator, i, j, &(upper + lower * mirror));
            }

            system.operator[(2 * i, u_col)] = -1.0;
            system.operator[(u_col, 2 * i)] = self.ds;

            let v = state.rotation_velocity(self.s_mid[i]);
            system.rhs[2 * i] = v.x;
            system.rhs[2 * i + 1] = v.y;
        }
        system
    }
}

impl HydroModel for BoundaryElementModel {
    fn ndim(&self) -> usize {
        2 * self.segments() + 1
    }

    fn assemble(&self, t: f64) -> LinearSystem {
        let state = self.filament_state(t);
        debug!(
            "boundary element t={:.5} theta={:.6} theta_dot={:.6}",
            t, state.theta, state.theta_dot
        );
        self.assemble_state(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn model(params: SimParams, segments: usize, gauss_points: usize) -> BoundaryElementModel {
        BoundaryElementModel::new(
            &params,
            &BoundaryElementConfig {
                segments,
                gauss_points,
            },
        )
        .unwrap()
    }

    #[test]
    fn elements_tile_the_filament() {
        let m = model(SimParams::default(), 20, 4);
        assert_eq!(m.segments(), 20);
        assert_eq!(m.ndim(), 41);
        assert_relative_eq!(m.element_length() * 20.0, 1.0, epsilon = 1e-14);
        let total_weight: f64 = m.element_rules.iter().map(|r| r.weight_sum()).sum();
        assert_relative_eq!(total_weight, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.s_mid[0], -0.5 + 0.025, epsilon = 1e-14);
    }

    #[test]
    fn constraint_row_uses_element_length() {
        let m = model(SimParams::default(), 8, 3);
        let system = m.assemble(0.0);
        let last = system.ndim() - 1;
        for i in 0..8 {
            assert_relative_eq!(system.operator[(2 * i, last)], -1.0);
            assert_relative_eq!(system.operator[(last, 2 * i)], 0.125);
            assert_relative_eq!(system.operator[(last, 2 * i + 1)], 0.0);
        }
    }

    #[test]
    fn no_oscillation_means_no_swimming() {
        let m = model(
            SimParams {
                theta_amplitude: 0.0,
                ..SimParams::default()
            },
            10,
            4,
        );
        assert_abs_diff_eq!(m.swim_velocity(0.3).unwrap(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn oscillation_gives_finite_velocity() {
        let m = model(SimParams::default(), 20, 4);
        let u = m.swim_velocity(0.0).unwrap();
        assert!(u.is_finite());
        assert!(u.abs() < 10.0);
    }

    #[test]
    fn rejects_empty_discretization() {
        let result = BoundaryElementModel::new(
            &SimParams::default(),
            &BoundaryElementConfig {
                segments: 0,
                gauss_points: 6,
            },
        );
        assert!(matches!(result, Err(ScallopError::Configuration(_))));
    }
}
