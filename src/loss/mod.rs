pub mod decoding;
pub mod one_hot;
pub mod quantized;
pub mod squared_error;

pub use decoding::{OutputDecoding, DEFAULT_LOSS_SCALE};
pub use one_hot::OneHot;
pub use quantized::Quantized;
pub use squared_error::SquaredError;
