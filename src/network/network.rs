use crate::{
    activation::activation::ActivationFunction,
    errors::{NetworkError, Result},
    layers::dense::Layer,
    loss::{decoding::OutputDecoding, squared_error::SquaredError},
    network::{init::WeightInit, topology::Topology},
};

/// A fully connected feedforward network trained one example at a time.
///
/// Layer 0 is the input layer and holds no weights; every unit of layer
/// `l > 0` owns exactly `layers[l - 1].size()` weights. The shape is fixed
/// at construction; only weight values change afterwards.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    activation: ActivationFunction,
    decoding: OutputDecoding,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds the layers input → hidden(s) → output with all weights zeroed.
    /// Call [`Network::init_weights`] before training.
    pub fn new(
        topology: Topology,
        activation: ActivationFunction,
        decoding: OutputDecoding,
    ) -> Result<Network> {
        topology.validate()?;
        decoding.validate_output_size(topology.output_size)?;

        let sizes = topology.layer_sizes();
        let layers = sizes.iter()
            .enumerate()
            .map(|(index, &size)| {
                let fan_in = if index == 0 { 0 } else { sizes[index - 1] };
                Layer::new(index, size, fan_in)
            })
            .collect();

        log::debug!(
            "built network {:?} ({} weights, {:?}, {} decoding)",
            sizes,
            topology.weight_count(),
            activation,
            decoding.name()
        );

        Ok(Network { topology, activation, decoding, layers })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn decoding(&self) -> OutputDecoding {
        self.decoding
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Current output-layer activations.
    pub fn outputs(&self) -> Vec<f64> {
        self.output_layer().activations()
    }

    /// Replaces every weight with a fresh non-zero draw from the seeded
    /// generator. Skipping this call keeps previously trained weights.
    pub fn init_weights(&mut self, seed: u64) {
        let mut init = WeightInit::new(seed);
        for layer in self.layers.iter_mut().skip(1) {
            for node in layer.nodes_mut() {
                for w in node.weights_mut() {
                    *w = init.next_weight();
                }
            }
        }
        log::debug!("initialized {} weights with seed {}", self.topology.weight_count(), seed);
    }

    /// Forward pass: loads `input` as the input-layer activations, then
    /// computes every following layer left to right. Returns the output
    /// activations; weights are not touched.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.topology.input_size {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.topology.input_size,
                actual: input.len(),
            });
        }

        self.layers[0].load_input(input);
        for l in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(l);
            rest[0].feed_from(&done[l - 1], self.activation);
        }
        Ok(self.outputs())
    }

    /// Backward pass for the example last given to [`Network::forward`].
    ///
    /// Output errors are g'(a) · (target - a); hidden errors are propagated
    /// from the layer above. The input layer gets no error.
    pub fn backward(&mut self, label: usize) -> Result<()> {
        self.decoding.validate_label(label, self.topology.output_size)?;

        let activator = self.activation;
        let outputs = self.outputs();
        let targets = self.decoding.targets(outputs.len(), label);
        let residuals = SquaredError::residual(&outputs, &targets);

        let last = self.layers.len() - 1;
        for (node, r) in self.layers[last].nodes_mut().iter_mut().zip(residuals) {
            node.error = activator.derivative(node.activation) * r;
        }

        for l in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(l + 1);
            head[l].backpropagate_from(&tail[0], activator);
        }
        Ok(())
    }

    /// Loss of the current output activations against `label`.
    pub fn loss(&self, label: usize) -> f64 {
        self.decoding.loss(&self.outputs(), label)
    }

    /// Label decoded from the current output activations.
    pub fn predict(&self) -> Result<usize> {
        self.decoding.predict(&self.outputs())
    }
}
