use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::errors::{NetworkError, Result};
use crate::loss::decoding::OutputDecoding;

/// Locations of the IDX image/label files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPaths {
    pub train_images: PathBuf,
    pub train_labels: PathBuf,
    /// Held-out set, only read in `ExperimentMode::Test`.
    #[serde(default)]
    pub test_images: Option<PathBuf>,
    #[serde(default)]
    pub test_labels: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            train_images: PathBuf::from("../MNIST/train-images.idx3-ubyte"),
            train_labels: PathBuf::from("../MNIST/train-labels.idx1-ubyte"),
            test_images: Some(PathBuf::from("../MNIST/t10k-images-idx3-ubyte")),
            test_labels: Some(PathBuf::from("../MNIST/t10k-labels-idx1-ubyte")),
        }
    }
}

/// What the experiment reports.
///
/// - `Validation`: train and validate every epoch, reporting both phases.
/// - `Test`:       train only, then validate once, then evaluate the frozen
///                  weights on the held-out test files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentMode {
    #[default]
    Validation,
    Test,
}

/// A complete, JSON-serializable description of one image experiment.
/// Missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub data: DataPaths,
    pub hidden_layers: usize,
    pub hidden_layer_size: usize,
    pub output_size: usize,
    pub activation: ActivationFunction,
    pub decoding: OutputDecoding,
    pub learning_rate: f64,
    /// Weight-initialization seed; drawn at random (and logged) when absent.
    pub seed: Option<u64>,
    pub epochs: usize,
    /// Only the first `num_examples` training images are used.
    pub num_examples: usize,
    /// Share of `num_examples` used for training; the rest validates.
    pub training_fraction: f64,
    pub mode: ExperimentMode,
    /// Decimal places used when printing accuracy and loss.
    pub report_precision: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            data: DataPaths::default(),
            hidden_layers: 3,
            hidden_layer_size: 32,
            output_size: 1,
            activation: ActivationFunction::Sigmoid,
            decoding: OutputDecoding::quantized(),
            learning_rate: 8e-3,
            seed: None,
            epochs: 700,
            num_examples: 6000,
            training_fraction: 2.0 / 3.0,
            mode: ExperimentMode::Validation,
            report_precision: 4,
        }
    }
}

impl ExperimentConfig {
    /// Checks the settings that do not depend on the data.
    pub fn validate(&self) -> Result<()> {
        if !(self.training_fraction > 0.0 && self.training_fraction <= 1.0) {
            return Err(NetworkError::config(format!(
                "training_fraction must be in (0, 1], got {}",
                self.training_fraction
            )));
        }
        if self.num_examples == 0 {
            return Err(NetworkError::config("num_examples must be at least 1"));
        }
        if self.mode == ExperimentMode::Test
            && (self.data.test_images.is_none() || self.data.test_labels.is_none())
        {
            return Err(NetworkError::config(
                "test mode needs both data.test_images and data.test_labels",
            ));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: ExperimentConfig = serde_json::from_str(
            r#"{"epochs": 5, "activation": "tanh", "decoding": {"type": "one_hot"}, "output_size": 10}"#,
        ).unwrap();
        assert_eq!(cfg.epochs, 5);
        assert_eq!(cfg.activation, ActivationFunction::Tanh);
        assert_eq!(cfg.decoding, OutputDecoding::OneHot);
        assert_eq!(cfg.hidden_layers, 3);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_validate() {
        assert!(ExperimentConfig::default().validate().is_ok());

        let cfg = ExperimentConfig { training_fraction: 0.0, ..ExperimentConfig::default() };
        assert!(cfg.validate().is_err());

        let mut cfg = ExperimentConfig { mode: ExperimentMode::Test, ..ExperimentConfig::default() };
        cfg.data.test_labels = None;
        assert!(matches!(cfg.validate(), Err(NetworkError::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir()
            .join(format!("ferrite-mlp-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"seed": 12, "epochs": 3, "mode": "test"}"#).unwrap();
        let cfg = ExperimentConfig::load_json(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.seed, Some(12));
        assert_eq!(cfg.epochs, 3);
        assert_eq!(cfg.mode, ExperimentMode::Test);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            ExperimentConfig::load_json("/definitely/not/here.json"),
            Err(NetworkError::Io(_))
        ));
    }

    #[test]
    fn test_save_then_load_json_file() {
        let path = std::env::temp_dir()
            .join(format!("ferrite-mlp-saved-config-{}.json", std::process::id()));
        let mut cfg = ExperimentConfig {
            hidden_layers: 2,
            activation: ActivationFunction::Tanh,
            learning_rate: 0.25,
            seed: Some(41),
            training_fraction: 0.75,
            mode: ExperimentMode::Test,
            report_precision: 6,
            ..ExperimentConfig::default()
        };
        cfg.data.train_images = PathBuf::from("/data/train-images.idx3-ubyte");

        cfg.save_json(path.to_str().unwrap()).unwrap();
        let loaded = ExperimentConfig::load_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, cfg);
        assert!(loaded.validate().is_ok());
    }
}
