use serde::{Serialize, Deserialize};

/// Activation applied by every non-input unit of a network.
///
/// The same variant is used for the forward pass (`function`) and the
/// backward pass (`derivative`), so a network never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    /// Logistic sigmoid, output in (0, 1).
    #[default]
    Sigmoid,
    /// Hyperbolic tangent, output in (-1, 1).
    Tanh,
}

impl ActivationFunction {
    /// g(x), applied to a unit's weighted input.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// g'(x) expressed through the activation `y = g(x)` that the forward
    /// pass already cached on the unit.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
        }
    }
}
