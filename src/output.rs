use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::Result,
    state::{RunSummary, TrajectoryRecord},
};

pub fn format_record(record: &TrajectoryRecord) -> String {
    format!(
        "{:.5} {:.10} {:.10}\n",
        record.t, record.velocity, record.displacement
    )
}

/// Line-per-step trajectory file. Each record is flushed once written, so an
/// aborted run leaves every completed step on disk.
pub struct TrajectoryWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TrajectoryWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        info!("Writing trajectory to {}", path.display());
        Ok(TrajectoryWriter {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn write(&mut self, record: &TrajectoryRecord) -> Result<()> {
        self.writer.write_all(format_record(record).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        info!("Results saved to {}", self.path.display());
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct VelocityRow {
    time: f64,
    #[serde(rename = "U0")]
    u0: f64,
}

/// Velocity series as `time,U0` CSV.
pub fn write_velocity_csv<P: AsRef<Path>>(path: P, trajectory: &[TrajectoryRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for record in trajectory {
        wtr.serialize(VelocityRow {
            time: record.t,
            u0: record.velocity,
        })?;
    }
    wtr.flush()?;
    info!("Velocity series saved to {}", path.as_ref().display());
    Ok(())
}

#[derive(serde::Serialize)]
struct RunRecord<'a, S: serde::Serialize> {
    setup: &'a S,
    summary: Option<&'a RunSummary>,
}

/// Run parameters and summary as pretty JSON.
pub fn write_run_json<P: AsRef<Path>, S: serde::Serialize>(
    path: P,
    setup: &S,
    summary: Option<&RunSummary>,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &RunRecord { setup, summary })?;
    writer.flush()?;
    info!("Run parameters saved to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scallop-output-{}-{}", std::process::id(), name))
    }

    #[test]
    fn record_format_matches_fixed_columns() {
        let record = TrajectoryRecord {
            t: 0.002,
            velocity: -0.123456789012,
            displacement: 1.5e-4,
        };
        assert_eq!(format_record(&record), "0.00200 -0.1234567890 0.0001500000\n");
    }

    #[test]
    fn writer_truncates_and_appends_lines() {
        let path = temp_path("trajectory.txt");
        fs::write(&path, "stale contents\n").unwrap();

        let mut writer = TrajectoryWriter::create(&path).unwrap();
        for i in 0..3 {
            writer
                .write(&TrajectoryRecord {
                    t: i as f64 * 0.5,
                    velocity: 1.0,
                    displacement: i as f64,
                })
                .unwrap();
        }
        writer.close().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0.00000 1.0000000000 0.0000000000",
                "0.50000 1.0000000000 1.0000000000",
                "1.00000 1.0000000000 2.0000000000",
            ]
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn velocity_csv_has_header() {
        let path = temp_path("velocity.csv");
        let trajectory = [
            TrajectoryRecord {
                t: 0.0,
                velocity: 0.25,
                displacement: 0.0,
            },
            TrajectoryRecord {
                t: 0.5,
                velocity: -0.5,
                displacement: 0.0,
            },
        ];
        write_velocity_csv(&path, &trajectory).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "time,U0\n0.0,0.25\n0.5,-0.5\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn run_json_reports_failed_writes() {
        let summary = RunSummary {
            steps: 1,
            final_displacement: 0.0,
            min_velocity: 0.0,
            max_velocity: 0.0,
            mean_velocity: 0.0,
        };
        let result = write_run_json("/dev/full", &"setup", Some(&summary));
        assert!(matches!(result, Err(crate::error::ScallopError::Io(_))));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let result = TrajectoryWriter::create("/nonexistent/scallop/trajectory.txt");
        assert!(matches!(result, Err(crate::error::ScallopError::Io(_))));
    }
}
