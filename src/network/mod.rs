pub mod init;
pub mod network;
pub mod topology;

pub use init::WeightInit;
pub use network::Network;
pub use topology::Topology;
