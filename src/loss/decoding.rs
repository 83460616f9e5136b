use serde::{Serialize, Deserialize};

use crate::errors::{NetworkError, Result};
use crate::loss::one_hot::OneHot;
use crate::loss::quantized::{Quantized, MAX_LABEL};
use crate::loss::squared_error::SquaredError;

/// Default weight applied to the single quantized residual. Its residuals are
/// a tenth of a bucket apart, so 100 puts one bucket of error at loss 1.
pub const DEFAULT_LOSS_SCALE: f64 = 100.0;

fn default_loss_scale() -> f64 {
    DEFAULT_LOSS_SCALE
}

/// Selects how the output layer is turned into targets, losses and labels.
///
/// - `OneHot`:    one output unit per class; argmax decoding.
/// - `Quantized`: exactly one output unit; the [0, 1] range is cut into ten
///   buckets, labels 0..=9. `loss_scale` multiplies the squared residual.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputDecoding {
    #[default]
    OneHot,
    Quantized {
        #[serde(default = "default_loss_scale")]
        loss_scale: f64,
    },
}

impl OutputDecoding {
    /// Quantized decoding with the default loss scale.
    pub fn quantized() -> Self {
        OutputDecoding::Quantized { loss_scale: DEFAULT_LOSS_SCALE }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputDecoding::OneHot => "one-hot",
            OutputDecoding::Quantized { .. } => "quantized",
        }
    }

    /// Checks the policy against the output layer size and its own settings.
    pub fn validate_output_size(&self, output_size: usize) -> Result<()> {
        match *self {
            OutputDecoding::OneHot => {
                if output_size == 0 {
                    return Err(NetworkError::OutputSizeMismatch {
                        policy: self.name(),
                        required: "at least 1".to_owned(),
                        actual: output_size,
                    });
                }
            }
            OutputDecoding::Quantized { loss_scale } => {
                if output_size != 1 {
                    return Err(NetworkError::OutputSizeMismatch {
                        policy: self.name(),
                        required: "exactly 1".to_owned(),
                        actual: output_size,
                    });
                }
                if !(loss_scale.is_finite() && loss_scale > 0.0) {
                    return Err(NetworkError::config(format!(
                        "quantized loss_scale must be a positive number, got {}",
                        loss_scale
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rejects labels the policy cannot represent.
    pub fn validate_label(&self, label: usize, output_size: usize) -> Result<()> {
        let max = match self {
            OutputDecoding::OneHot => output_size.saturating_sub(1),
            OutputDecoding::Quantized { .. } => MAX_LABEL,
        };
        if label > max {
            return Err(NetworkError::LabelOutOfRange { label, max });
        }
        Ok(())
    }

    /// Desired activation of output unit `unit` for an example labelled `label`.
    pub fn target(&self, unit: usize, label: usize) -> f64 {
        match self {
            OutputDecoding::OneHot => OneHot::target(unit, label),
            OutputDecoding::Quantized { .. } => Quantized::target(label),
        }
    }

    /// Full target vector for an output layer of `output_size` units.
    pub fn targets(&self, output_size: usize, label: usize) -> Vec<f64> {
        (0..output_size).map(|unit| self.target(unit, label)).collect()
    }

    /// Per-example loss of the output activations against `label`.
    pub fn loss(&self, outputs: &[f64], label: usize) -> f64 {
        let expected = self.targets(outputs.len(), label);
        let sum = SquaredError::loss(outputs, &expected);
        match self {
            OutputDecoding::OneHot => sum,
            OutputDecoding::Quantized { loss_scale } => loss_scale * sum,
        }
    }

    /// Decodes the output activations into a label.
    pub fn predict(&self, outputs: &[f64]) -> Result<usize> {
        match self {
            OutputDecoding::OneHot => Ok(OneHot::predict(outputs)),
            OutputDecoding::Quantized { .. } => {
                let activation = outputs.first().copied().unwrap_or(f64::NAN);
                Quantized::predict(activation)
            }
        }
    }
}
