use std::path::PathBuf;

pub struct RunParams {
    pub t_max: f64,
    // Steps between progress reports.
    pub dstep_log: usize,
    pub output_path: PathBuf,
    // Optional `time,U0` velocity series.
    pub csv_path: Option<PathBuf>,
    // Optional JSON record of the setup and run summary.
    pub json_path: Option<PathBuf>,
}
