use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use scallop::{
    config::{run::RunParams, setup::SetupConfig},
    dynamics::run,
};

#[derive(Debug, clap::Parser)]
#[command(name = "scallop_run", about = "Simulate a two-filament scallop swimmer")]
pub struct RunCli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'o', long = "output", default_value = "scallop_results.txt")]
    pub output: PathBuf,

    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,

    #[arg(long = "json")]
    pub json: Option<PathBuf>,

    #[arg(short = 't')]
    pub t_max: Option<f64>,

    #[arg(short = 'd', long = "dt-log", default_value_t = 0.1)]
    pub dt_log: f64,

    #[arg(long = "print-params")]
    pub print_params: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = RunCli::parse();

    let setup_config = match &args.config {
        Some(path) => {
            info!("Reading setup from {}", path.display());
            match SetupConfig::parse(path) {
                Ok(config) => config,
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            warn!("No config specified, using default parameters");
            SetupConfig::default()
        }
    };
    if args.print_params {
        setup_config.print();
    }

    let sim_params = &setup_config.parameters.sim_params;
    let run_params = RunParams {
        t_max: args.t_max.unwrap_or(sim_params.t_max),
        dstep_log: sim_params.to_steps(args.dt_log),
        output_path: args.output,
        csv_path: args.csv,
        json_path: args.json,
    };

    match run(&setup_config, &run_params) {
        Ok(_) => {
            info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
