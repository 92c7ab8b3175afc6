//! Image processing and ranking components.
//!
//! * [`normalization`] - pixel normalization into model input ranges
//! * [`preprocess`] - resize + normalize into batched tensors
//! * [`topk`] - ranking of model scores into predictions

pub mod normalization;
pub mod preprocess;
pub mod topk;

pub use normalization::{ChannelOrder, Normalizer};
pub use preprocess::ImagePreprocessor;
pub use topk::Topk;
