use std::f64::consts::TAU;

use crate::error::{Result, ScallopError};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SimParams {
    // Time step.
    pub dt: f64,
    pub t_max: f64,
    // Discretization.
    pub quadrature_order: usize,
    // Filament shape.
    pub filament_radius: f64,
    pub slenderness: f64,
    pub regularization: f64,
    pub separation: f64,
    // Hinge kinematics.
    pub theta_amplitude: f64,
    pub theta_tilt: f64,
    pub oscillation_period: f64,
}

impl SimParams {
    pub fn to_steps(&self, t: f64) -> usize {
        (t / self.dt).ceil() as usize
    }

    pub fn n_points(&self) -> usize {
        self.quadrature_order + 1
    }

    pub fn angular_frequency(&self) -> f64 {
        TAU / self.oscillation_period
    }

    pub fn theta(&self, t: f64) -> f64 {
        self.theta_amplitude * (self.angular_frequency() * t).sin() + self.theta_tilt
    }

    pub fn theta_dot(&self, t: f64) -> f64 {
        self.angular_frequency() * self.theta_amplitude * (self.angular_frequency() * t).cos()
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("dt", self.dt),
            ("t_max", self.t_max),
            ("filament_radius", self.filament_radius),
            ("regularization", self.regularization),
            ("separation", self.separation),
            ("oscillation_period", self.oscillation_period),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScallopError::Configuration(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("slenderness", self.slenderness),
            ("theta_amplitude", self.theta_amplitude),
            ("theta_tilt", self.theta_tilt),
        ] {
            if !value.is_finite() {
                return Err(ScallopError::Configuration(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.quadrature_order < 1 {
            return Err(ScallopError::Configuration(format!(
                "quadrature_order must be at least 1, got {}",
                self.quadrature_order
            )));
        }
        Ok(())
    }
}

impl Default for SimParams {
    fn default() -> Self {
        super::physical::PhysicalParams::default().as_params()
    }
}
