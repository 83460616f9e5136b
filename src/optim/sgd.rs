use crate::{errors::{NetworkError, Result}, network::network::Network};

/// Plain online gradient step: no batching, momentum, decay or schedule.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetworkError::config(format!(
                "learning_rate must be a positive number, got {}",
                learning_rate
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies weight += lr · previous activation · error to every edge.
    ///
    /// Must follow `Network::backward` for the same example. Activations and
    /// errors are read-only here, so the layer order does not matter.
    pub fn step(&self, network: &mut Network) {
        let layers = network.layers_mut();
        for l in 1..layers.len() {
            let (done, rest) = layers.split_at_mut(l);
            rest[0].apply_errors(&done[l - 1], self.learning_rate);
        }
    }
}
