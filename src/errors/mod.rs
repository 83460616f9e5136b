pub mod network_error;

pub use network_error::NetworkError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;
