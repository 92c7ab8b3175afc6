//! Tensor type aliases used throughout the pipeline.

/// A 2-dimensional tensor represented as a 2D array of f32 values.
///
/// Model output uses this shape: `batch_size x num_classes`.
pub type Tensor2D = ndarray::Array2<f32>;

/// A 3-dimensional tensor represented as a 3D array of f32 values.
pub type Tensor3D = ndarray::Array3<f32>;

/// A 4-dimensional tensor represented as a 4D array of f32 values.
///
/// Preprocessed input uses this shape: a leading batch axis followed by the
/// image axes in the configured channel order.
pub type Tensor4D = ndarray::Array4<f32>;
