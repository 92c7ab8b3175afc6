//! The inference pipeline and its supporting types.

pub mod inference;
pub mod stats;

pub use inference::{InferencePipeline, InferencePipelineBuilder, PipelineState};
pub use stats::{PipelineStats, StatsManager};
