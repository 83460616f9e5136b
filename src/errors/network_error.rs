//! Error types shared by the network, the trainer and the data readers.

use thiserror::Error;

/// Errors that can occur while building, training or evaluating a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    #[error("{policy} decoding requires {required} output unit(s), network has {actual}")]
    OutputSizeMismatch {
        policy: &'static str,
        required: String,
        actual: usize,
    },

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Label {label} is out of range (largest valid label is {max})")]
    LabelOutOfRange { label: usize, max: usize },

    #[error("Output activation {activation} does not fall into any label bucket")]
    OutputOutOfRange { activation: f64 },

    #[error("Dataset has {inputs} inputs but {labels} labels")]
    DatasetLengthMismatch { inputs: usize, labels: usize },

    #[error("Cannot run the {phase} phase on an empty dataset")]
    EmptyDataset { phase: &'static str },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid data file: {message}")]
    InvalidDataFile { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        NetworkError::InvalidConfig { message: message.into() }
    }

    pub(crate) fn data_file(message: impl Into<String>) -> Self {
        NetworkError::InvalidDataFile { message: message.into() }
    }
}
