use std::time::Instant;

use crate::data::dataset::Dataset;
use crate::errors::{NetworkError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::{EpochStats, PhaseStats, RunningTotals};
use crate::train::loop_fn::{train_epoch, validate_epoch};
use crate::train::train_config::TrainConfig;

/// Owns a network and its data for a fixed-length training run.
///
/// Each epoch is a mandatory training phase optionally followed by a
/// validation phase. Examples are visited in their original order every
/// epoch, so a given seed always reproduces the same run.
#[derive(Debug)]
pub struct Trainer {
    network: Network,
    optimizer: Sgd,
    config: TrainConfig,
    training: Dataset,
    validation: Dataset,
    current_epoch: usize,
    train_totals: RunningTotals,
    validation_totals: RunningTotals,
}

impl Trainer {
    /// Binds `network` to the given data and hyperparameters.
    ///
    /// Every example must match the input layer size and carry a label the
    /// network's decoding can represent. Weights are re-drawn from
    /// `config.seed` unless `config.reinitialize_weights` is `false`.
    pub fn initialize(
        mut network: Network,
        config: TrainConfig,
        training: Dataset,
        validation: Dataset,
    ) -> Result<Trainer> {
        config.validate()?;
        let optimizer = Sgd::new(config.learning_rate)?;
        check_dataset(&network, &training)?;
        check_dataset(&network, &validation)?;

        if config.reinitialize_weights {
            network.init_weights(config.seed);
        }

        Ok(Trainer {
            network,
            optimizer,
            config,
            training,
            validation,
            current_epoch: 0,
            train_totals: RunningTotals::default(),
            validation_totals: RunningTotals::default(),
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Hands the (possibly trained) network back, e.g. to re-initialize a
    /// trainer on held-out data with `reinitialize_weights = false`.
    pub fn into_network(self) -> Network {
        self.network
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn training_set(&self) -> &Dataset {
        &self.training
    }

    pub fn validation_set(&self) -> &Dataset {
        &self.validation
    }

    /// Number of epochs completed by the current run.
    pub fn current_epoch(&self) -> usize {
        self.current_epoch
    }

    /// Runs `config.epochs` epochs of training, each followed by validation
    /// when the validation set is non-empty. Logs and returns every epoch.
    pub fn train_and_validate(&mut self) -> Result<Vec<EpochStats>> {
        self.current_epoch = 0;
        let mut history = Vec::with_capacity(self.config.epochs);

        while self.current_epoch < self.config.epochs {
            let t_start = Instant::now();
            let train = self.train_single_epoch()?;
            let validation = if self.validation.is_empty() {
                None
            } else {
                Some(self.validate()?)
            };

            let stats = EpochStats {
                epoch: self.current_epoch,
                total_epochs: self.config.epochs,
                train,
                validation,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            log::info!("{}", stats.summary_line(self.config.log_precision));
            history.push(stats);
        }

        Ok(history)
    }

    /// Runs `config.epochs` training epochs without validation and returns
    /// the statistics of the last one.
    pub fn train(&mut self) -> Result<EpochStats> {
        self.current_epoch = 0;
        let mut last = None;

        while self.current_epoch < self.config.epochs {
            let t_start = Instant::now();
            let train = self.train_single_epoch()?;
            let stats = EpochStats {
                epoch: self.current_epoch,
                total_epochs: self.config.epochs,
                train,
                validation: None,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            log::debug!(
                "epoch {}/{}: train accuracy {:.4}, train loss {:.4}",
                stats.epoch, stats.total_epochs, train.accuracy, train.loss
            );
            last = Some(stats);
        }

        last.ok_or_else(|| NetworkError::config("epochs must be at least 1"))
    }

    /// One validation pass over the validation set with the current weights.
    pub fn validate(&mut self) -> Result<PhaseStats> {
        validate_epoch(&mut self.network, &self.validation, &mut self.validation_totals)?;
        self.validation_totals.summary()
            .ok_or(NetworkError::EmptyDataset { phase: "validation" })
    }

    /// Statistics of the most recent training phase, if any ran.
    pub fn training_result(&self) -> Option<PhaseStats> {
        self.train_totals.summary()
    }

    /// Statistics of the most recent validation phase, if any ran.
    pub fn validation_result(&self) -> Option<PhaseStats> {
        self.validation_totals.summary()
    }

    fn train_single_epoch(&mut self) -> Result<PhaseStats> {
        train_epoch(&mut self.network, &self.optimizer, &self.training, &mut self.train_totals)?;
        self.current_epoch += 1;
        self.train_totals.summary()
            .ok_or(NetworkError::EmptyDataset { phase: "training" })
    }
}

/// Input lengths must match the input layer; labels must be decodable.
fn check_dataset(network: &Network, data: &Dataset) -> Result<()> {
    let topology = network.topology();
    for (input, label) in data.iter() {
        if input.len() != topology.input_size {
            return Err(NetworkError::InputSizeMismatch {
                expected: topology.input_size,
                actual: input.len(),
            });
        }
        network.decoding().validate_label(label, topology.output_size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{activation::ActivationFunction, loss::OutputDecoding, network::Topology};
    use approx::assert_abs_diff_eq;

    /// 1 input → 2 one-hot outputs; positive inputs decode to 0, negative to 1.
    fn sign_network() -> Network {
        let mut net = Network::new(
            Topology::new(1, 0, 1, 2),
            ActivationFunction::Sigmoid,
            OutputDecoding::OneHot,
        ).unwrap();
        let out = &mut net.layers_mut()[1];
        out.nodes_mut()[0].weights_mut()[0] = 1.0;
        out.nodes_mut()[1].weights_mut()[0] = -1.0;
        net
    }

    #[test]
    fn test_validation_accuracy_and_mean_loss() {
        let inputs = vec![vec![1.0], vec![2.0], vec![-1.0], vec![-2.0]];
        let labels = vec![0, 0, 1, 0];
        let validation = Dataset::new(inputs.clone(), labels.clone()).unwrap();

        let mut expected_losses = Vec::new();
        let mut reference = sign_network();
        for (x, &y) in inputs.iter().zip(&labels) {
            reference.forward(x).unwrap();
            expected_losses.push(reference.loss(y));
        }
        let expected_mean = expected_losses.iter().sum::<f64>() / 4.0;

        let config = TrainConfig::new(0.1, 0, 1).reinitialize_weights(false);
        let mut trainer =
            Trainer::initialize(sign_network(), config, Dataset::empty(), validation).unwrap();
        let stats = trainer.validate().unwrap();

        assert_eq!(stats.correct, 3);
        assert_abs_diff_eq!(stats.accuracy, 0.75);
        assert_abs_diff_eq!(stats.loss, expected_mean, epsilon = 1e-12);
        assert_eq!(trainer.validation_result(), Some(stats));
        assert!(trainer.training_result().is_none());
    }

    #[test]
    fn test_skipping_reinitialization_keeps_weights() {
        let config = TrainConfig::new(0.1, 99, 1).reinitialize_weights(false);
        let trainer = Trainer::initialize(
            sign_network(),
            config,
            Dataset::empty(),
            Dataset::empty(),
        ).unwrap();
        assert_eq!(trainer.network().output_layer().nodes()[0].weights(), &[1.0]);

        let config = TrainConfig::new(0.1, 99, 1);
        let trainer = Trainer::initialize(
            trainer.into_network(),
            config,
            Dataset::empty(),
            Dataset::empty(),
        ).unwrap();
        let w = trainer.network().output_layer().nodes()[0].weights()[0];
        assert!(w != 1.0 && w.abs() <= 0.5);
    }

    #[test]
    fn test_initialize_checks_data_against_network() {
        let bad_input = Dataset::new(vec![vec![1.0, 2.0]], vec![0]).unwrap();
        assert!(matches!(
            Trainer::initialize(sign_network(), TrainConfig::new(0.1, 0, 1), bad_input, Dataset::empty()),
            Err(NetworkError::InputSizeMismatch { expected: 1, actual: 2 })
        ));

        let bad_label = Dataset::new(vec![vec![1.0]], vec![2]).unwrap();
        assert!(matches!(
            Trainer::initialize(sign_network(), TrainConfig::new(0.1, 0, 1), Dataset::empty(), bad_label),
            Err(NetworkError::LabelOutOfRange { label: 2, max: 1 })
        ));

        assert!(matches!(
            Trainer::initialize(sign_network(), TrainConfig::new(0.1, 0, 0), Dataset::empty(), Dataset::empty()),
            Err(NetworkError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_runs_exact_epoch_count_and_skips_empty_validation() {
        let training = Dataset::new(vec![vec![1.0], vec![-1.0]], vec![0, 1]).unwrap();
        let mut trainer = Trainer::initialize(
            sign_network(),
            TrainConfig::new(0.1, 5, 7),
            training,
            Dataset::empty(),
        ).unwrap();
        let history = trainer.train_and_validate().unwrap();
        assert_eq!(history.len(), 7);
        assert_eq!(trainer.current_epoch(), 7);
        assert!(history.iter().all(|s| s.validation.is_none() && s.train.samples == 2));
        assert_eq!(history.last().unwrap().epoch, 7);
    }

    #[test]
    fn test_train_on_empty_set_fails() {
        let mut trainer = Trainer::initialize(
            sign_network(),
            TrainConfig::new(0.1, 5, 3),
            Dataset::empty(),
            Dataset::empty(),
        ).unwrap();
        assert!(matches!(trainer.train(), Err(NetworkError::EmptyDataset { phase: "training" })));
        assert!(matches!(trainer.validate(), Err(NetworkError::EmptyDataset { phase: "validation" })));
    }
}
