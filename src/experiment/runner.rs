use serde::{Serialize, Deserialize};

use crate::data::{dataset::Dataset, idx::load_idx_pair, normalize::normalize_pixels};
use crate::errors::{NetworkError, Result};
use crate::experiment::config::{ExperimentConfig, ExperimentMode};
use crate::network::{network::Network, topology::Topology};
use crate::train::{
    epoch_stats::{EpochStats, PhaseStats},
    train_config::TrainConfig,
    trainer::Trainer,
};

/// Everything an experiment produced, for the caller to print or store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Seed actually used for weight initialization.
    pub seed: u64,
    /// Per-epoch history (validation mode only).
    pub epochs: Vec<EpochStats>,
    pub training: Option<PhaseStats>,
    pub validation: Option<PhaseStats>,
    /// Frozen-weight result on the held-out set (test mode only).
    pub test: Option<PhaseStats>,
}

/// Loads the IDX files named by `config` and runs the experiment.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport> {
    config.validate()?;

    let raw = load_idx_pair(&config.data.train_images, &config.data.train_labels)?;
    log::info!("number of images: {} ({}x{})", raw.images.len(), raw.rows, raw.cols);
    let pool = Dataset::new(normalize_pixels(&raw.images), raw.labels)?;

    let test = match config.mode {
        ExperimentMode::Validation => None,
        ExperimentMode::Test => {
            let (images, labels) = match (&config.data.test_images, &config.data.test_labels) {
                (Some(images), Some(labels)) => (images, labels),
                _ => return Err(NetworkError::config("test mode needs test image and label files")),
            };
            let raw = load_idx_pair(images, labels)?;
            log::info!("number of testing images: {}", raw.images.len());
            Some(Dataset::new(normalize_pixels(&raw.images), raw.labels)?)
        }
    };

    run_with_data(config, pool, test)
}

/// Runs the experiment on already-normalized data.
///
/// The first `num_examples` of `pool` are split into training and validation
/// by `training_fraction`; `test` is only used in `ExperimentMode::Test`.
pub fn run_with_data(
    config: &ExperimentConfig,
    mut pool: Dataset,
    test: Option<Dataset>,
) -> Result<ExperimentReport> {
    config.validate()?;

    let input_size = pool.inputs().first().map(Vec::len).ok_or(NetworkError::EmptyDataset {
        phase: "training",
    })?;

    pool.truncate(config.num_examples);
    let n_training = (config.training_fraction * pool.len() as f64).round() as usize;
    let (training, validation) = pool.split_at(n_training);
    log::info!(
        "num training examples: {}, num validation examples: {}",
        training.len(),
        validation.len()
    );

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let topology = Topology::new(
        input_size,
        config.hidden_layers,
        config.hidden_layer_size,
        config.output_size,
    );
    let network = Network::new(topology, config.activation, config.decoding)?;
    let train_config = TrainConfig::new(config.learning_rate, seed, config.epochs)
        .log_precision(config.report_precision);
    let mut trainer = Trainer::initialize(network, train_config.clone(), training, validation)?;

    match config.mode {
        ExperimentMode::Validation => {
            let epochs = trainer.train_and_validate()?;
            Ok(ExperimentReport {
                seed,
                epochs,
                training: trainer.training_result(),
                validation: trainer.validation_result(),
                test: None,
            })
        }
        ExperimentMode::Test => {
            let test = test.ok_or_else(|| NetworkError::config("test mode needs a test dataset"))?;
            trainer.train()?;
            let training = trainer.training_result();
            let validation = if trainer.validation_set().is_empty() {
                None
            } else {
                Some(trainer.validate()?)
            };

            let frozen = train_config.reinitialize_weights(false);
            let mut evaluator =
                Trainer::initialize(trainer.into_network(), frozen, Dataset::empty(), test)?;
            let test = evaluator.validate()?;

            Ok(ExperimentReport { seed, epochs: Vec::new(), training, validation, test: Some(test) })
        }
    }
}
