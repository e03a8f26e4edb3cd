#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub t: f64,
    pub velocity: f64,
    pub displacement: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SimState {
    pub t: f64,
    pub step: usize,
    pub displacement: f64,
    // Velocity solved on the previous step; None before the first solve.
    pub u_prev: Option<f64>,
    pub trajectory: Vec<TrajectoryRecord>,
}

impl SimState {
    pub fn new() -> SimState {
        SimState::default()
    }

    pub fn times(&self) -> Vec<f64> {
        self.trajectory.iter().map(|r| r.t).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.trajectory.iter().map(|r| r.velocity).collect()
    }

    pub fn summary(&self) -> Option<RunSummary> {
        let first = self.trajectory.first()?;
        let (min_velocity, max_velocity) = self
            .trajectory
            .iter()
            .fold((first.velocity, first.velocity), |(lo, hi), r| {
                (lo.min(r.velocity), hi.max(r.velocity))
            });
        let mean_velocity = self.trajectory.iter().map(|r| r.velocity).sum::<f64>()
            / self.trajectory.len() as f64;
        Some(RunSummary {
            steps: self.trajectory.len(),
            final_displacement: self.displacement,
            min_velocity,
            max_velocity,
            mean_velocity,
        })
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub final_displacement: f64,
    pub min_velocity: f64,
    pub max_velocity: f64,
    pub mean_velocity: f64,
}
