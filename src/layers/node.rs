use std::fmt;

/// Position of a unit in the network: layer index plus position inside
/// that layer. `weights[i]` on a unit always belongs to the edge coming from
/// the unit at position `i` of the previous layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub layer: usize,
    pub position: usize,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}:{}", self.layer, self.position)
    }
}

/// A single unit.
///
/// `activation` and `error` are scratch values overwritten on every
/// forward/backward pass. Input-layer units own no weights.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    pub activation: f64,
    pub error: f64,
    weights: Vec<f64>,
}

impl Node {
    /// Creates a unit with `fan_in` zeroed weights; they stay zero until
    /// `Network::init_weights` runs.
    pub fn new(id: NodeId, fan_in: usize) -> Node {
        Node {
            id,
            activation: 0.0,
            error: 0.0,
            weights: vec![0.0; fan_in],
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> usize {
        self.id.position
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view of the weight values. The slice length (fan-in) is fixed.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Weighted input: Σ weights[i] · previous[i].activation.
    pub fn weighted_input(&self, previous: &[Node]) -> f64 {
        self.weights.iter()
            .zip(previous.iter())
            .map(|(w, prev)| w * prev.activation)
            .sum()
    }
}
