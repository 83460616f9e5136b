pub mod dataset;
pub mod idx;
pub mod normalize;

pub use dataset::Dataset;
pub use idx::{load_idx_pair, parse_idx_pair, IdxData};
pub use normalize::normalize_pixels;
