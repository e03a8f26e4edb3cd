use self::{physical::PhysicalParams, simulation::SimParams};

pub mod physical;
pub mod simulation;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ParametersYaml {
    Physical(PhysicalParams),
    Simulation(SimParams),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Parameters {
    pub sim_params: SimParams,
    pub physical_params: Option<PhysicalParams>,
}

impl From<ParametersYaml> for Parameters {
    fn from(raw: ParametersYaml) -> Self {
        match raw {
            ParametersYaml::Physical(physical_params) => Parameters {
                sim_params: physical_params.as_params(),
                physical_params: Some(physical_params),
            },
            ParametersYaml::Simulation(sim_params) => Parameters {
                sim_params,
                physical_params: None,
            },
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        ParametersYaml::Physical(PhysicalParams::default()).into()
    }
}
