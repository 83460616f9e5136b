// Image experiment driver.
// Usage:
//   ferrite-mlp [config.json]
// Without a config file the defaults in `ExperimentConfig::default()` apply.
// Set RUST_LOG=debug for construction and initialization details.
use ferrite_mlp::{experiment::ExperimentMode, run_experiment, ExperimentConfig, PhaseStats};

fn print_phase(title: &str, epoch: usize, stats: Option<PhaseStats>, precision: usize) {
    match stats {
        Some(s) => println!(
            "{} (epoch {}):\n\tAccuracy: {:.p$}\tLoss: {:.p$}",
            title, epoch, s.accuracy, s.loss, p = precision
        ),
        None => println!("{} (epoch {}): no examples", title, epoch),
    }
}

fn run() -> ferrite_mlp::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", path);
            ExperimentConfig::load_json(&path)?
        }
        None => ExperimentConfig::default(),
    };

    let report = run_experiment(&config)?;
    let p = config.report_precision;
    println!("seed: {}", report.seed);

    match config.mode {
        ExperimentMode::Validation => {
            // every epoch is also logged by the trainer at the same precision
            if let Some(e) = report.epochs.last() {
                println!("{}", e.summary_line(p));
            }
        }
        ExperimentMode::Test => {
            print_phase("Training", config.epochs, report.training, p);
            print_phase("Validation", config.epochs, report.validation, p);
            print_phase("Testing", config.epochs, report.test, p);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
