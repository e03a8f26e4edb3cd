use super::simulation::SimParams;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PhysicalParams {
    // Time step.
    pub dt: f64,
    // Run duration.
    pub t_max: f64,
    // Quadrature order; each filament carries `quadrature_order + 1` points.
    pub quadrature_order: usize,
    // Filament shape. Lengths are in units of the filament length.
    pub filament_radius: f64,
    // Hinge kinematics: theta(t) = amplitude * sin(2 pi t / period) + tilt.
    pub theta_amplitude: f64,
    pub theta_tilt: f64,
    #[serde(default = "default_oscillation_period")]
    pub oscillation_period: f64,
}

fn default_oscillation_period() -> f64 {
    1.0
}

impl Default for PhysicalParams {
    fn default() -> Self {
        PhysicalParams {
            dt: 2e-3,
            t_max: 1.0,
            quadrature_order: 101,
            filament_radius: 1e-2,
            theta_amplitude: 1.0,
            theta_tilt: 1.0,
            oscillation_period: default_oscillation_period(),
        }
    }
}

impl PhysicalParams {
    // c = |ln(a^2) + 1|
    pub fn slenderness(&self) -> f64 {
        (self.filament_radius.powi(2).ln() + 1.0).abs()
    }

    pub fn regularization(&self) -> f64 {
        4.0 * self.filament_radius
    }

    // Vertical offset of each hinge from the symmetry axis.
    pub fn separation(&self) -> f64 {
        5.0 * self.filament_radius
    }

    pub fn as_params(&self) -> SimParams {
        SimParams {
            dt: self.dt,
            t_max: self.t_max,
            quadrature_order: self.quadrature_order,
            filament_radius: self.filament_radius,
            slenderness: self.slenderness(),
            regularization: self.regularization(),
            separation: self.separation(),
            theta_amplitude: self.theta_amplitude,
            theta_tilt: self.theta_tilt,
            oscillation_period: self.oscillation_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derived_constants_follow_radius() {
        let physical = PhysicalParams::default();
        let params = physical.as_params();
        assert_relative_eq!(params.slenderness, ((1e-4f64).ln() + 1.0).abs());
        assert_relative_eq!(params.regularization, 0.04);
        assert_relative_eq!(params.separation, 0.05);
        assert_eq!(params.quadrature_order, 101);
        assert_eq!(params.n_points(), 102);
    }
}
