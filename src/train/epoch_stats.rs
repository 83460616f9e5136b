use serde::{Serialize, Deserialize};

/// Accuracy and mean loss of one phase (training or validation) of an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub samples: usize,
    pub correct: usize,
    /// correct / samples, in [0, 1].
    pub accuracy: f64,
    /// Summed per-example loss / samples.
    pub loss: f64,
}

/// Counters accumulated while a phase runs. Reset at the start of each phase.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningTotals {
    samples: usize,
    correct: usize,
    loss_sum: f64,
}

impl RunningTotals {
    pub fn reset(&mut self) {
        *self = RunningTotals::default();
    }

    pub fn record(&mut self, loss: f64, correct: bool) {
        self.samples += 1;
        self.loss_sum += loss;
        if correct {
            self.correct += 1;
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// `None` until at least one example has been recorded.
    pub fn summary(&self) -> Option<PhaseStats> {
        if self.samples == 0 {
            return None;
        }
        let n = self.samples as f64;
        Some(PhaseStats {
            samples: self.samples,
            correct: self.correct,
            accuracy: self.correct as f64 / n,
            loss: self.loss_sum / n,
        })
    }
}

/// Per-epoch statistics returned (and logged) by the trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    pub train: PhaseStats,
    /// Present only when the epoch ran a validation phase.
    pub validation: Option<PhaseStats>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// One-line report with accuracy and loss at `precision` decimal places.
    pub fn summary_line(&self, precision: usize) -> String {
        let mut line = format!(
            "epoch {}/{}: trainAccuracy {:.p$}, trainLoss {:.p$}",
            self.epoch, self.total_epochs, self.train.accuracy, self.train.loss,
            p = precision
        );
        if let Some(val) = self.validation {
            line.push_str(&format!(
                ", valAccuracy {:.p$}, valLoss {:.p$}",
                val.accuracy, val.loss,
                p = precision
            ));
        }
        line
    }
}
