//! The core module of the classification pipeline.
//!
//! This module contains the fundamental components of the pipeline:
//! - Configuration management
//! - Constants used throughout the crate
//! - Error handling
//! - Label sets
//! - Prediction result types
//! - Tensor type aliases
//! - The model capability trait
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod config;
pub mod constants;
pub mod errors;
pub mod labels;
pub mod predictions;
pub mod tensor;
pub mod traits;

pub use config::{
    ConfigFormat, ConfigLoader, ModelConfig, OrtGraphOptimizationLevel, OrtSessionConfig,
    PipelineConfig, PreprocessConfig, ResizeFilter,
};
pub use constants::*;
pub use errors::{ClassifyError, ClassifyResult, SimpleError};
pub use labels::{LabelSet, flower_labels};
pub use predictions::{Prediction, RankedResult};
pub use tensor::{Tensor2D, Tensor3D, Tensor4D};
pub use traits::ClassifierModel;

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with an environment filter and a
/// formatting layer. Typically called once at the start of an application.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
