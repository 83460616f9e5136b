use crate::{activation::activation::ActivationFunction, layers::node::{Node, NodeId}};

/// A fixed-size, fully connected layer of units.
#[derive(Debug, Clone)]
pub struct Layer {
    index: usize,
    nodes: Vec<Node>,
}

impl Layer {
    /// Builds layer `index` with `size` units, each owning `fan_in` weights
    /// (0 for the input layer).
    pub fn new(index: usize, size: usize, fan_in: usize) -> Layer {
        let nodes = (0..size)
            .map(|position| Node::new(NodeId { layer: index, position }, fan_in))
            .collect();
        Layer { index, nodes }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn activations(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.activation).collect()
    }

    /// Copies an example straight into the activations (input layer only).
    pub fn load_input(&mut self, input: &[f64]) {
        for (node, &x) in self.nodes.iter_mut().zip(input.iter()) {
            node.activation = x;
            node.error = 0.0;
        }
    }

    /// Forward step: activation = g(weighted input from `previous`).
    pub fn feed_from(&mut self, previous: &Layer, activator: ActivationFunction) {
        for node in &mut self.nodes {
            node.activation = activator.function(node.weighted_input(&previous.nodes));
        }
    }

    /// Backward step for a hidden layer: each unit's error is
    /// g'(activation) · Σ over `next` of (weight to this unit · next error).
    pub fn backpropagate_from(&mut self, next: &Layer, activator: ActivationFunction) {
        for node in &mut self.nodes {
            let position = node.position();
            let downstream: f64 = next.nodes.iter()
                .map(|n| n.weights()[position] * n.error)
                .sum();
            node.error = activator.derivative(node.activation) * downstream;
        }
    }

    /// Online update: weight += lr · previous activation · this error.
    pub fn apply_errors(&mut self, previous: &Layer, lr: f64) {
        for node in &mut self.nodes {
            let error = node.error;
            for (w, prev) in node.weights_mut().iter_mut().zip(previous.nodes.iter()) {
                *w += lr * prev.activation * error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input_layer(values: &[f64]) -> Layer {
        let mut layer = Layer::new(0, values.len(), 0);
        layer.load_input(values);
        layer
    }

    #[test]
    fn test_new_sizes_weights_to_fan_in() {
        let layer = Layer::new(1, 3, 4);
        assert_eq!(layer.size(), 3);
        assert!(layer.nodes().iter().all(|n| n.weights().len() == 4));
        assert_eq!(layer.nodes()[2].id(), NodeId { layer: 1, position: 2 });
    }

    #[test]
    fn test_feed_from_applies_activation() {
        let input = input_layer(&[1.0, 2.0]);
        let mut hidden = Layer::new(1, 1, 2);
        hidden.nodes_mut()[0].weights_mut().copy_from_slice(&[0.5, -0.25]);
        hidden.feed_from(&input, ActivationFunction::Tanh);
        assert_abs_diff_eq!(hidden.activations()[0], 0.0);
    }

    #[test]
    fn test_backpropagate_from_sums_downstream_errors() {
        let mut hidden = Layer::new(1, 2, 1);
        hidden.nodes_mut()[0].activation = 0.5;
        hidden.nodes_mut()[1].activation = 0.5;

        let mut output = Layer::new(2, 2, 2);
        output.nodes_mut()[0].weights_mut().copy_from_slice(&[1.0, 2.0]);
        output.nodes_mut()[1].weights_mut().copy_from_slice(&[3.0, 4.0]);
        output.nodes_mut()[0].error = 0.1;
        output.nodes_mut()[1].error = -0.1;

        hidden.backpropagate_from(&output, ActivationFunction::Sigmoid);
        // g'(0.5) = 0.25
        assert_abs_diff_eq!(hidden.nodes()[0].error, 0.25 * (1.0 * 0.1 - 3.0 * 0.1), epsilon = 1e-12);
        assert_abs_diff_eq!(hidden.nodes()[1].error, 0.25 * (2.0 * 0.1 - 4.0 * 0.1), epsilon = 1e-12);
    }

    #[test]
    fn test_apply_errors() {
        let input = input_layer(&[1.0, 0.0]);
        let mut out = Layer::new(1, 1, 2);
        out.nodes_mut()[0].weights_mut().copy_from_slice(&[0.2, 0.3]);
        out.nodes_mut()[0].error = 0.5;
        out.apply_errors(&input, 0.1);
        assert_abs_diff_eq!(out.nodes()[0].weights()[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(out.nodes()[0].weights()[1], 0.3, epsilon = 1e-12);
    }
}
