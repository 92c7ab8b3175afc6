//! Core traits for model capabilities.
//!
//! The pipeline treats the classifier as an opaque capability behind the
//! [`ClassifierModel`] trait: anything that can turn a preprocessed tensor
//! into a score matrix can drive it. The production implementation is
//! [`crate::models::OrtClassifier`]; tests substitute in-memory stubs.

use crate::core::errors::ClassifyError;
use crate::core::tensor::{Tensor2D, Tensor4D};

/// A classification model capability.
///
/// Implementations must accept exactly the tensor shape the preprocessor
/// emits and return a `batch_size x num_classes` score matrix. No assumption
/// is made that the model is trained meaningfully; only shape and type
/// conformance are required.
pub trait ClassifierModel: Send + Sync {
    /// Runs the model on a preprocessed input batch.
    ///
    /// # Arguments
    ///
    /// * `input` - Preprocessed batch tensor with a leading batch axis.
    ///
    /// # Returns
    ///
    /// A `batch_size x num_classes` matrix of confidence scores, one row per
    /// input image.
    fn predict(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError>;

    /// Reports whether the model is ready to serve predictions. The pipeline
    /// never calls `predict` while this returns false.
    fn is_ready(&self) -> bool {
        true
    }

    /// A short name for the model, used in logs and error context.
    fn name(&self) -> &str;
}
