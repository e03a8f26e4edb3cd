use nalgebra::{DMatrix, Point2, Vector2};

use crate::config::setup::parameters::simulation::SimParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filament {
    // Hinged above the symmetry axis.
    Upper,
    // Mirror image of the upper filament.
    Lower,
}

/// Filament configuration at one instant. Arclength `s` runs over [-1/2, 1/2]
/// with the hinge at `s = -1/2`.
#[derive(Debug, Clone)]
pub struct FilamentState {
    pub t: f64,
    pub theta: f64,
    pub theta_dot: f64,
    pub separation: f64,
    pub arclength: Vec<f64>,
    pub r1: Vec<Point2<f64>>,
    pub r2: Vec<Point2<f64>>,
}

impl FilamentState {
    pub fn new(params: &SimParams, arclength: &[f64], t: f64) -> Self {
        let theta = params.theta(t);
        let theta_dot = params.theta_dot(t);
        let mut state = FilamentState {
            t,
            theta,
            theta_dot,
            separation: params.separation,
            arclength: arclength.to_vec(),
            r1: Vec::with_capacity(arclength.len()),
            r2: Vec::with_capacity(arclength.len()),
        };
        for s in arclength {
            let r1 = state.position(Filament::Upper, *s);
            state.r1.push(r1);
            state.r2.push(mirror(r1));
        }
        state
    }

    pub fn n_points(&self) -> usize {
        self.arclength.len()
    }

    pub fn tangent(&self, filament: Filament) -> Vector2<f64> {
        let (sin, cos) = self.theta.sin_cos();
        match filament {
            Filament::Upper => Vector2::new(cos, sin),
            Filament::Lower => Vector2::new(cos, -sin),
        }
    }

    pub fn hinge(&self, filament: Filament) -> Point2<f64> {
        match filament {
            Filament::Upper => Point2::new(0.0, self.separation),
            Filament::Lower => Point2::new(0.0, -self.separation),
        }
    }

    pub fn position(&self, filament: Filament, s: f64) -> Point2<f64> {
        self.hinge(filament) + self.tangent(filament) * (s + 0.5)
    }

    /// Velocity of the upper filament at arclength `s` from rigid rotation about its hinge.
    pub fn rotation_velocity(&self, s: f64) -> Vector2<f64> {
        let (sin, cos) = self.theta.sin_cos();
        Vector2::new(-sin, cos) * ((s + 0.5) * self.theta_dot)
    }
}

pub fn mirror(p: Point2<f64>) -> Point2<f64> {
    Point2::new(p.x, -p.y)
}

/// Pairwise distances needed by the nonlocal operator.
#[derive(Debug, Clone)]
pub struct InteractionGeometry {
    // sqrt((s_i - s_j)^2 + delta^2)
    pub s_reg: DMatrix<f64>,
    // |r1_i - r2_j| and its unit direction.
    pub cross_distance: DMatrix<f64>,
    pub cross_rhat_x: DMatrix<f64>,
    pub cross_rhat_y: DMatrix<f64>,
}

impl InteractionGeometry {
    pub fn new(state: &FilamentState, regularization: f64) -> Self {
        let n = state.n_points();
        let s = &state.arclength;
        let s_reg = DMatrix::from_fn(n, n, |i, j| {
            ((s[i] - s[j]).powi(2) + regularization.powi(2)).sqrt()
        });

        let mut cross_distance = DMatrix::zeros(n, n);
        let mut cross_rhat_x = DMatrix::zeros(n, n);
        let mut cross_rhat_y = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let r = state.r1[i] - state.r2[j];
                let r_mag = r.norm();
                cross_distance[(i, j)] = r_mag;
                cross_rhat_x[(i, j)] = r.x / r_mag;
                cross_rhat_y[(i, j)] = r.y / r_mag;
            }
        }

        InteractionGeometry {
            s_reg,
            cross_distance,
            cross_rhat_x,
            cross_rhat_y,
        }
    }
}
