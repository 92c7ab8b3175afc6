//! Error types for the classification pipeline.
//!
//! This module defines the error taxonomy shared by every component of the
//! crate: image validation and decoding errors, lifecycle errors raised when
//! the pipeline or model is invoked out of sequence, contract violations
//! between model output and label set, and wrappers for the underlying
//! ONNX Runtime, tensor, and IO errors. Helper constructors keep error
//! creation uniform across call sites.

use thiserror::Error;

use crate::pipeline::PipelineState;

/// Convenient result alias for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Enum representing the errors that can occur in the classification pipeline.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The input image is structurally invalid (zero width or height, or an
    /// otherwise unusable pixel buffer).
    #[error("invalid image: {message}")]
    InvalidImage {
        /// A message describing why the image was rejected.
        message: String,
    },

    /// An encoded image byte stream or file could not be decoded.
    #[error("image decode")]
    ImageDecode(#[source] image::ImageError),

    /// The model was asked to predict before it signalled readiness.
    #[error("model '{model_name}' is not ready")]
    ModelNotReady {
        /// Name of the model that was invoked.
        model_name: String,
    },

    /// The pipeline was asked to classify while not in a ready state.
    /// The caller should (re-)initialize the pipeline.
    #[error("pipeline is not ready: state is {state}")]
    PipelineNotReady {
        /// The state the pipeline was in when the call was rejected.
        state: PipelineState,
    },

    /// The model output length disagrees with the label set. This is a
    /// configuration bug between model and labels, not a transient failure.
    #[error("shape mismatch: expected {expected} classes, got {actual}")]
    ShapeMismatch {
        /// Number of classes the label set defines.
        expected: usize,
        /// Number of entries the model actually produced.
        actual: usize,
    },

    /// The model did not return a prediction within the configured deadline.
    /// Transient; safe to retry once the pipeline is ready again.
    #[error("inference timed out after {timeout_ms} ms")]
    InferenceTimeout {
        /// The deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// Error occurred during model inference.
    #[error("inference failed for model '{model_name}': {context}")]
    Inference {
        /// Name of the model that failed.
        model_name: String,
        /// Additional context about the failure.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input outside the image domain.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl ClassifyError {
    /// Creates an error for a structurally invalid image.
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
        }
    }

    /// Creates an error for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an error for configuration problems.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates an error for a model/label-set contract violation.
    ///
    /// # Arguments
    ///
    /// * `expected` - The number of classes the label set defines.
    /// * `actual` - The number of entries the model produced.
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Creates an error for a model that is not ready to predict.
    pub fn model_not_ready(model_name: impl Into<String>) -> Self {
        Self::ModelNotReady {
            model_name: model_name.into(),
        }
    }

    /// Creates an error for a failed model invocation, preserving the
    /// underlying cause.
    ///
    /// # Arguments
    ///
    /// * `model_name` - Name of the model that failed.
    /// * `context` - What the invocation was doing when it failed.
    /// * `error` - The underlying error.
    pub fn inference_error(
        model_name: impl Into<String>,
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Inference {
            model_name: model_name.into(),
            context: context.into(),
            source: Box::new(error),
        }
    }
}

/// Implementation of From<image::ImageError> for ClassifyError.
///
/// This allows image::ImageError to be automatically converted to ClassifyError.
impl From<image::ImageError> for ClassifyError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageDecode(error)
    }
}

/// A minimal string-backed error for wrapping plain messages as error sources.
#[derive(Debug)]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    /// Creates a new SimpleError with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimpleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SimpleError {}
