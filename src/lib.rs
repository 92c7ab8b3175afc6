//! # petal-classify
//!
//! An image-classification inference pipeline: preprocessing, model
//! invocation, and top-k prediction ranking.
//!
//! ## Features
//!
//! - Fixed-shape preprocessing: deterministic resize plus pixel
//!   normalization into batched tensors
//! - Swappable model capability with an ONNX Runtime production backend
//! - Deterministic top-k ranking with stable tie-breaking
//! - Explicit pipeline lifecycle with readiness checks, a model self-test,
//!   serialized invocation, and an optional predict deadline
//! - Configuration from TOML or JSON files
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, labels, predictions, tensors, traits
//! * [`models`] - Model backends (ONNX Runtime)
//! * [`pipeline`] - The inference pipeline and run statistics
//! * [`processors`] - Preprocessing and ranking components
//! * [`utils`] - Image loading and conversion helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use petal_classify::prelude::*;
//! use petal_classify::models::OrtClassifier;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = OrtClassifier::new("models/flowers.onnx")?;
//! let pipeline = InferencePipelineBuilder::new()
//!     .top_k(5)
//!     .shared_model(Arc::new(model))
//!     .build()?;
//! pipeline.initialize()?;
//!
//! let image = load_image(std::path::Path::new("rose.jpg"))?;
//! let result = pipeline.classify(&image)?;
//! for prediction in result.iter() {
//!     println!("{prediction}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Commonly used types for working with the classification pipeline.
pub mod prelude {
    // Pipeline (essential)
    pub use crate::pipeline::{
        InferencePipeline, InferencePipelineBuilder, PipelineState, PipelineStats,
    };

    // Configuration and results
    pub use crate::core::{
        ClassifierModel, LabelSet, PipelineConfig, Prediction, RankedResult, flower_labels,
    };

    // Error handling (essential)
    pub use crate::core::{ClassifyError, ClassifyResult};

    // Image utility (minimal)
    pub use crate::utils::{decode_image, load_image};
}
