pub struct SquaredError;

impl SquaredError {
    /// Summed (not averaged) squared residual: Σ (expected - predicted)²
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .sum()
    }

    /// Per-output residual: expected - predicted
    pub fn residual(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| y - p)
            .collect()
    }
}
