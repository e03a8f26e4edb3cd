pub mod model;
pub mod parameters;

use std::{fs::File, io::Read, path::Path};

use crate::error::{Result, ScallopError};

use self::{
    model::{IntegrationScheme, ModelConfig},
    parameters::{Parameters, ParametersYaml},
};

#[derive(serde::Serialize, serde::Deserialize)]
struct ConfigYaml {
    parameters: ParametersYaml,
    #[serde(default)]
    model: ModelConfig,
    #[serde(default)]
    integration: IntegrationScheme,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct SetupConfig {
    pub parameters: Parameters,
    pub model: ModelConfig,
    pub integration: IntegrationScheme,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config_raw: ConfigYaml = serde_yaml::from_str(contents)?;
        let config = SetupConfig {
            parameters: config_raw.parameters.into(),
            model: config_raw.model,
            integration: config_raw.integration,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.parameters.sim_params.validate()?;
        if let ModelConfig::BoundaryElement(bem) = &self.model {
            if bem.segments < 1 || bem.gauss_points < 1 {
                return Err(ScallopError::Configuration(format!(
                    "Boundary elements need at least one segment and one Gauss point, got {} and {}",
                    bem.segments, bem.gauss_points
                )));
            }
        }
        Ok(())
    }

    pub fn print(&self) {
        if let Some(physical_params) = &self.parameters.physical_params {
            println!(
                "\
Physical parameters:
  Time step: {dt}
  Duration: {t_max}
  Filament radius: {a}
  Oscillation: amplitude {theta_a} rad, tilt {theta_0} rad, period {tau}",
                dt = physical_params.dt,
                t_max = physical_params.t_max,
                a = physical_params.filament_radius,
                theta_a = physical_params.theta_amplitude,
                theta_0 = physical_params.theta_tilt,
                tau = physical_params.oscillation_period,
            );
        }
        let sim_params = &self.parameters.sim_params;
        println!(
            "\
Simulation parameters:
  Quadrature points per filament: {npts}
  Slenderness constant: {c:.4}
  Regularization length: {delta}
  Hinge separation: {sep}
  Steps: {steps}

Model: {model:?}
Integration: {integration:?}",
            npts = sim_params.n_points(),
            c = sim_params.slenderness,
            delta = sim_params.regularization,
            sep = sim_params.separation,
            steps = sim_params.to_steps(sim_params.t_max),
            model = self.model,
            integration = self.integration,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::setup::model::BoundaryElementConfig;
    use approx::assert_relative_eq;

    #[test]
    fn parses_physical_parameters() {
        let config = SetupConfig::from_yaml(
            "
parameters:
  type: Physical
  dt: 0.001
  t_max: 0.5
  quadrature_order: 20
  filament_radius: 0.02
  theta_amplitude: 0.5
  theta_tilt: 1.2
",
        )
        .unwrap();
        let sim_params = &config.parameters.sim_params;
        assert_eq!(sim_params.quadrature_order, 20);
        assert_relative_eq!(sim_params.regularization, 0.08);
        assert_relative_eq!(sim_params.separation, 0.1);
        assert_relative_eq!(sim_params.oscillation_period, 1.0);
        assert_eq!(config.model, ModelConfig::Nonlocal);
        assert_eq!(config.integration, IntegrationScheme::AdamsBashforth2);
        assert!(config.parameters.physical_params.is_some());
    }

    #[test]
    fn parses_boundary_element_model() {
        let config = SetupConfig::from_yaml(
            "
parameters:
  type: Simulation
  dt: 0.002
  t_max: 1.0
  quadrature_order: 10
  filament_radius: 0.01
  slenderness: 8.2
  regularization: 0.01
  separation: 0.05
  theta_amplitude: 1.0
  theta_tilt: 1.0
  oscillation_period: 2.0
model:
  type: BoundaryElement
  segments: 40
  gauss_points: 4
integration: forward_euler
",
        )
        .unwrap();
        assert_eq!(
            config.model,
            ModelConfig::BoundaryElement(BoundaryElementConfig {
                segments: 40,
                gauss_points: 4
            })
        );
        assert_eq!(config.integration, IntegrationScheme::ForwardEuler);
        assert!(config.parameters.physical_params.is_none());
        assert_relative_eq!(config.parameters.sim_params.oscillation_period, 2.0);
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        let result = SetupConfig::from_yaml(
            "
parameters:
  type: Physical
  dt: -0.001
  t_max: 1.0
  quadrature_order: 20
  filament_radius: 0.01
  theta_amplitude: 1.0
  theta_tilt: 1.0
",
        );
        assert!(matches!(result, Err(ScallopError::Configuration(_))));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let result = SetupConfig::from_yaml("parameters: [1, 2");
        assert!(matches!(result, Err(ScallopError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SetupConfig::parse("/nonexistent/scallop/config.yaml");
        assert!(matches!(result, Err(ScallopError::Io(_))));
    }
}
