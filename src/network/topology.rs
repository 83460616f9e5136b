use serde::{Serialize, Deserialize};

use crate::errors::{NetworkError, Result};

/// Shape of a network: one input layer, `hidden_layers` hidden layers of
/// `hidden_layer_size` units each, one output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_size: usize,
    pub hidden_layers: usize,
    pub hidden_layer_size: usize,
    pub output_size: usize,
}

impl Topology {
    pub fn new(
        input_size: usize,
        hidden_layers: usize,
        hidden_layer_size: usize,
        output_size: usize,
    ) -> Topology {
        Topology { input_size, hidden_layers, hidden_layer_size, output_size }
    }

    /// Every layer size must be positive. `hidden_layer_size` is checked even
    /// when there are no hidden layers.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("input_size", self.input_size),
            ("hidden_layer_size", self.hidden_layer_size),
            ("output_size", self.output_size),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(NetworkError::InvalidTopology {
                    message: format!("{} must be at least 1", name),
                });
            }
        }
        Ok(())
    }

    /// Unit count of every layer, input first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers + 2);
        sizes.push(self.input_size);
        sizes.extend(std::iter::repeat(self.hidden_layer_size).take(self.hidden_layers));
        sizes.push(self.output_size);
        sizes
    }

    /// Total number of weights (edges) in the network.
    pub fn weight_count(&self) -> usize {
        self.layer_sizes().windows(2).map(|w| w[0] * w[1]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_sizes() {
        let t = Topology::new(784, 3, 32, 1);
        assert_eq!(t.layer_sizes(), vec![784, 32, 32, 32, 1]);
        assert_eq!(t.weight_count(), 784 * 32 + 32 * 32 * 2 + 32);
    }

    #[test]
    fn test_no_hidden_layers() {
        let t = Topology::new(4, 0, 8, 2);
        assert_eq!(t.layer_sizes(), vec![4, 2]);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(Topology::new(0, 1, 2, 1).validate().is_err());
        assert!(Topology::new(2, 1, 0, 1).validate().is_err());
        assert!(matches!(
            Topology::new(2, 1, 2, 0).validate(),
            Err(NetworkError::InvalidTopology { .. })
        ));
    }
}
