//! Constants used throughout the classification pipeline.

/// Default model input shape as (height, width).
pub const DEFAULT_INPUT_SHAPE: (u32, u32) = (224, 224);

/// Number of channels the pipeline works with (RGB).
pub const IMAGE_CHANNELS: usize = 3;

/// Default number of top predictions returned per image.
pub const DEFAULT_TOP_K: usize = 5;

/// Default deadline for a single model invocation, in milliseconds.
pub const DEFAULT_PREDICT_TIMEOUT_MS: u64 = 30_000;

/// Number of images above which batch loading switches to parallel reads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;
