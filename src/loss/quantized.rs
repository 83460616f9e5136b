use crate::errors::{NetworkError, Result};

/// Inclusive upper edge of each label bucket; bucket `k` covers `(k/10, (k+1)/10]`
/// and bucket 0 also takes everything at or below 0.1.
pub const BUCKET_UPPER_BOUNDS: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Largest label representable by the bucket table.
pub const MAX_LABEL: usize = BUCKET_UPPER_BOUNDS.len() - 1;

/// A single output unit whose [0, 1] range is split into ten equal buckets.
pub struct Quantized;

impl Quantized {
    /// Training target for `label`: label / 10.
    pub fn target(label: usize) -> f64 {
        label as f64 / 10.0
    }

    /// Smallest bucket whose upper edge is at or above `activation`.
    ///
    /// Anything above 1.0 (or NaN) fits no bucket and is reported, never clamped.
    pub fn predict(activation: f64) -> Result<usize> {
        BUCKET_UPPER_BOUNDS.iter()
            .position(|&upper| activation <= upper)
            .ok_or(NetworkError::OutputOutOfRange { activation })
    }
}
