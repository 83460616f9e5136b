use serde::{Serialize, Deserialize};

use crate::errors::{NetworkError, Result};

fn default_reinitialize_weights() -> bool {
    true
}

fn default_log_precision() -> usize {
    4
}

/// Hyperparameters for a `Trainer` run.
///
/// # Fields
/// - `learning_rate`:        step size of the online update; must be positive
/// - `seed`:                 seeds weight initialization, nothing else
/// - `epochs`:               exact number of passes; no early stopping
/// - `reinitialize_weights`: when `false`, `Trainer::initialize` keeps the
///                            network's current weights (evaluate a trained
///                            network on held-out data)
/// - `log_precision`:        decimal places in the per-epoch log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub seed: u64,
    pub epochs: usize,
    #[serde(default = "default_reinitialize_weights")]
    pub reinitialize_weights: bool,
    #[serde(default = "default_log_precision")]
    pub log_precision: usize,
}

impl TrainConfig {
    /// Creates a config that re-initializes weights.
    pub fn new(learning_rate: f64, seed: u64, epochs: usize) -> Self {
        TrainConfig {
            learning_rate,
            seed,
            epochs,
            reinitialize_weights: true,
            log_precision: default_log_precision(),
        }
    }

    pub fn reinitialize_weights(mut self, reinitialize: bool) -> Self {
        self.reinitialize_weights = reinitialize;
        self
    }

    pub fn log_precision(mut self, precision: usize) -> Self {
        self.log_precision = precision;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::config(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(NetworkError::config("epochs must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(TrainConfig::new(0.1, 0, 10).validate().is_ok());
        assert!(TrainConfig::new(0.0, 0, 10).validate().is_err());
        assert!(TrainConfig::new(0.1, 0, 0).validate().is_err());
    }

    #[test]
    fn test_reinitialize_defaults_to_true_in_json() {
        let cfg: TrainConfig =
            serde_json::from_str(r#"{"learning_rate":0.008,"seed":3,"epochs":700}"#).unwrap();
        assert!(cfg.reinitialize_weights);
        assert_eq!(cfg, TrainConfig::new(0.008, 3, 700));
        assert_eq!(cfg.log_precision, 4);
        let cfg = cfg.reinitialize_weights(false).log_precision(6);
        assert!(!cfg.reinitialize_weights);
        assert_eq!(cfg.log_precision, 6);
    }
}
