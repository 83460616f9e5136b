pub mod config;
pub mod runner;

pub use config::{DataPaths, ExperimentConfig, ExperimentMode};
pub use runner::{run_experiment, run_with_data, ExperimentReport};
