pub mod bem;
pub mod integrator;
pub mod nonlocal;
pub mod stokes_solutions;

use log::{info, warn};

use crate::config::run::RunParams;
use crate::config::setup::{model::ModelConfig, SetupConfig};
use crate::error::{Result, ScallopError};
use crate::numerics::linalg::LinearSystem;
use crate::output::{write_run_json, write_velocity_csv, TrajectoryWriter};
use crate::state::SimState;

use self::bem::BoundaryElementModel;
use self::integrator::TimeIntegrator;
use self::nonlocal::NonlocalModel;

/// A hydrodynamic model of the scallop: builds the force-balance system at time
/// `t` whose last unknown is the swimming velocity.
pub trait HydroModel {
    fn ndim(&self) -> usize;

    fn assemble(&self, t: f64) -> LinearSystem;

    fn swim_velocity(&self, t: f64) -> Result<f64> {
        let x = self.assemble(t).solve()?;
        Ok(x[x.len() - 1])
    }
}

pub fn build_model(setup: &SetupConfig) -> Result<Box<dyn HydroModel>> {
    let sim_params = &setup.parameters.sim_params;
    let model: Box<dyn HydroModel> = match &setup.model {
        ModelConfig::Nonlocal => Box::new(NonlocalModel::new(sim_params)?),
        ModelConfig::BoundaryElement(bem) => Box::new(BoundaryElementModel::new(sim_params, bem)?),
    };
    info!(
        "Built {:?} model with {} unknowns",
        setup.model,
        model.ndim()
    );
    Ok(model)
}

pub fn run(setup: &SetupConfig, run_params: &RunParams) -> Result<SimState> {
    setup.validate()?;
    if !(run_params.t_max.is_finite() && run_params.t_max > 0.0) {
        return Err(ScallopError::Configuration(format!(
            "t_max must be finite and positive, got {}",
            run_params.t_max
        )));
    }
    let sim_params = &setup.parameters.sim_params;
    let model = build_model(setup)?;

    let mut writer = TrajectoryWriter::create(&run_params.output_path)?;
    let mut integrator = TimeIntegrator::new(sim_params.dt, run_params.t_max, setup.integration);
    let dstep_log = run_params.dstep_log.max(1);

    while let Some(record) = integrator.step(model.as_ref())? {
        writer.write(&record)?;
        if integrator.state().step % dstep_log == 0 {
            info!(
                "PROGRESS: step={}, t={:.2}, U={:.6}, x0={:.6}",
                integrator.state().step,
                record.t,
                record.velocity,
                record.displacement
            );
        }
    }
    writer.close()?;

    let sim_state = integrator.into_state();
    if let Some(csv_path) = &run_params.csv_path {
        write_velocity_csv(csv_path, &sim_state.trajectory)?;
    }
    let summary = sim_state.summary();
    match &summary {
        Some(summary) => info!(
            "Finished {} steps: net displacement {:.10}, velocity in [{:.6}, {:.6}], mean {:.6}",
            summary.steps,
            summary.final_displacement,
            summary.min_velocity,
            summary.max_velocity,
            summary.mean_velocity
        ),
        None => warn!("Run produced no steps"),
    }
    if let Some(json_path) = &run_params.json_path {
        write_run_json(json_path, setup, summary.as_ref())?;
    }
    Ok(sim_state)
}
