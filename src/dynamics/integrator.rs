use log::debug;

use crate::{
    config::setup::model::IntegrationScheme,
    error::Result,
    state::{SimState, TrajectoryRecord},
};

use super::HydroModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Stepping,
    Done,
}

/// Displacement change over one step given the current and previous velocity.
pub fn displacement_increment(scheme: IntegrationScheme, dt: f64, u: f64, u_prev: f64) -> f64 {
    match scheme {
        IntegrationScheme::AdamsBashforth2 => 0.5 * dt * (3.0 * u - u_prev),
        IntegrationScheme::ForwardEuler => dt * u,
    }
}

pub struct TimeIntegrator {
    dt: f64,
    t_max: f64,
    scheme: IntegrationScheme,
    phase: Phase,
    state: SimState,
}

impl TimeIntegrator {
    pub fn new(dt: f64, t_max: f64, scheme: IntegrationScheme) -> Self {
        TimeIntegrator {
            dt,
            t_max,
            scheme,
            phase: Phase::Uninitialized,
            state: SimState::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn into_state(self) -> SimState {
        self.state
    }

    /// Consume the velocity solved at the current time and move to the next step.
    pub fn advance(&mut self, u: f64) -> Option<TrajectoryRecord> {
        let phase = self.phase;
        let u_prev = match phase {
            Phase::Done => return None,
            // No earlier velocity: the first step reduces to forward Euler.
            Phase::Uninitialized => {
                self.phase = Phase::Stepping;
                u
            }
            Phase::Stepping => self.state.u_prev.unwrap_or(u),
        };

        let state = &mut self.state;
        state.displacement += displacement_increment(self.scheme, self.dt, u, u_prev);
        let record = TrajectoryRecord {
            t: state.t,
            velocity: u,
            displacement: state.displacement,
        };
        debug!(
            "step={} t={:.5} U={:.10} x0={:.10}",
            state.step, record.t, record.velocity, record.displacement
        );
        state.u_prev = Some(u);
        state.trajectory.push(record);
        state.t += self.dt;
        state.step += 1;

        if state.t >= self.t_max {
            self.phase = Phase::Done;
        }
        Some(record)
    }

    /// Solve the model at the current time and advance. Returns None once done.
    pub fn step<M: HydroModel + ?Sized>(&mut self, model: &M) -> Result<Option<TrajectoryRecord>> {
        if self.phase == Phase::Done {
            return Ok(None);
        }
        let u = model.swim_velocity(self.state.t)?;
        Ok(self.advance(u))
    }
}
