/// Offset subtracted from every raw pixel value before scaling.
pub const PIXEL_OFFSET: f64 = 125.0;
/// Divisor applied after the offset.
pub const PIXEL_SCALE: f64 = 255.0;

/// Maps raw integer pixels to floats via `(value - 125) / 255`, which keeps
/// byte intensities inside roughly [-0.49, 0.51].
pub fn normalize_pixels<T>(images: &[Vec<T>]) -> Vec<Vec<f64>>
where
    T: Copy + Into<f64>,
{
    images.iter()
        .map(|row| row.iter().map(|&v| (v.into() - PIXEL_OFFSET) / PIXEL_SCALE).collect())
        .collect()
}
