pub mod errors;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod experiment;

// Convenience re-exports
pub use errors::{NetworkError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::{dense::Layer, node::{Node, NodeId}};
pub use network::{network::Network, topology::Topology};
pub use loss::decoding::OutputDecoding;
pub use optim::sgd::Sgd;
pub use train::{EpochStats, PhaseStats, TrainConfig, Trainer};
pub use data::{dataset::Dataset, normalize::normalize_pixels};
pub use experiment::{run_experiment, ExperimentConfig, ExperimentReport};
