//! Configuration types for the classification pipeline.
//!
//! This module provides the serde-backed configuration surface of the crate:
//! pipeline options (input shape, top-k, labels, predict deadline),
//! preprocessing options (resize filter, normalization parameters, channel
//! order), ONNX Runtime session options, and a loader for TOML and JSON
//! configuration files. Every field has a default, so an empty configuration
//! file yields the reference behavior.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_INPUT_SHAPE, DEFAULT_PREDICT_TIMEOUT_MS, DEFAULT_TOP_K, IMAGE_CHANNELS,
};
use crate::core::errors::ClassifyError;
use crate::processors::ChannelOrder;

/// Resize interpolation filter, serializable counterpart of
/// `image::imageops::FilterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest-neighbor interpolation. The default; deterministic and the
    /// filter the reference system used.
    #[default]
    Nearest,
    /// Linear (triangle) interpolation.
    Triangle,
    /// Catmull-Rom cubic interpolation.
    CatmullRom,
    /// Gaussian interpolation.
    Gaussian,
    /// Lanczos interpolation with window 3.
    Lanczos3,
}

impl ResizeFilter {
    /// Maps this filter to the image crate's filter type.
    pub fn to_filter_type(self) -> image::imageops::FilterType {
        use image::imageops::FilterType;
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Configuration for image preprocessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Resize interpolation filter.
    pub resize_filter: ResizeFilter,
    /// Scaling factor applied to pixel values before mean/std normalization.
    pub scale: f32,
    /// Mean values for normalization (RGB order).
    pub mean: Vec<f32>,
    /// Standard deviation values for normalization (RGB order).
    pub std: Vec<f32>,
    /// Channel ordering of the output tensor.
    pub channel_order: ChannelOrder,
}

impl Default for PreprocessConfig {
    /// Defaults reproduce the reference preprocessing: nearest-neighbor
    /// resize, plain division by 255, HWC output.
    fn default() -> Self {
        Self {
            resize_filter: ResizeFilter::Nearest,
            scale: 1.0 / 255.0,
            mean: vec![0.0; IMAGE_CHANNELS],
            std: vec![1.0; IMAGE_CHANNELS],
            channel_order: ChannelOrder::HWC,
        }
    }
}

impl PreprocessConfig {
    /// Validates the preprocessing configuration.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.scale <= 0.0 {
            return Err(ClassifyError::config_error(format!(
                "scale must be greater than 0, got {}",
                self.scale
            )));
        }
        if self.mean.len() != IMAGE_CHANNELS {
            return Err(ClassifyError::config_error(format!(
                "mean must have exactly {IMAGE_CHANNELS} elements for RGB, got {}",
                self.mean.len()
            )));
        }
        if self.std.len() != IMAGE_CHANNELS {
            return Err(ClassifyError::config_error(format!(
                "std must have exactly {IMAGE_CHANNELS} elements for RGB, got {}",
                self.std.len()
            )));
        }
        for (i, &s) in self.std.iter().enumerate() {
            if s <= 0.0 {
                return Err(ClassifyError::config_error(format!(
                    "standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the inference pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model input shape as (height, width).
    pub input_shape: (u32, u32),
    /// Number of top predictions returned per image.
    pub top_k: usize,
    /// Class names in model output order. Empty means the built-in flower
    /// label set.
    pub labels: Vec<String>,
    /// Deadline for a single model invocation in milliseconds. `None`
    /// disables the deadline and runs the model on the caller's thread.
    pub predict_timeout_ms: Option<u64>,
    /// Preprocessing options.
    pub preprocess: PreprocessConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_shape: DEFAULT_INPUT_SHAPE,
            top_k: DEFAULT_TOP_K,
            labels: Vec::new(),
            predict_timeout_ms: Some(DEFAULT_PREDICT_TIMEOUT_MS),
            preprocess: PreprocessConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the predict deadline as a duration, if one is configured.
    pub fn predict_timeout(&self) -> Option<Duration> {
        self.predict_timeout_ms.map(Duration::from_millis)
    }

    /// Validates the pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::ConfigError` if the input shape has a zero
    /// dimension, `top_k` is 0, the deadline is 0 ms, or the preprocessing
    /// options are invalid. Label uniqueness is checked when the label set
    /// is constructed.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        let (height, width) = self.input_shape;
        if height == 0 || width == 0 {
            return Err(ClassifyError::config_error(format!(
                "input shape dimensions must be greater than 0, got ({height}, {width})"
            )));
        }
        if self.top_k == 0 {
            return Err(ClassifyError::config_error(
                "top_k must be greater than 0",
            ));
        }
        if self.predict_timeout_ms == Some(0) {
            return Err(ClassifyError::config_error(
                "predict_timeout_ms must be greater than 0; use null to disable the deadline",
            ));
        }
        self.preprocess.validate()
    }
}

/// Common configuration for building a model backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the model file.
    pub model_path: Option<PathBuf>,
    /// Human-readable model name for logs and errors. Defaults to the model
    /// file stem.
    pub model_name: Option<String>,
    /// Name of the model's input tensor. Auto-detected when unset.
    pub input_name: Option<String>,
    /// Number of pooled sessions for concurrent predictions (minimum 1).
    pub session_pool_size: Option<usize>,
    /// ONNX Runtime session options.
    pub ort_session: Option<OrtSessionConfig>,
}

/// Graph optimization level for ONNX Runtime sessions, serializable
/// counterpart of the ort builder's setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrtGraphOptimizationLevel {
    /// Disable all optimizations.
    DisableAll,
    /// Basic optimizations.
    Level1,
    /// Extended optimizations.
    Level2,
    /// Layout optimizations.
    Level3,
    /// All available optimizations.
    All,
}

/// ONNX Runtime session options applied when a session is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrtSessionConfig {
    /// Number of threads used to parallelize execution within nodes.
    pub intra_threads: Option<usize>,
    /// Number of threads used to parallelize execution across nodes.
    pub inter_threads: Option<usize>,
    /// Whether to run graph nodes in parallel.
    pub parallel_execution: Option<bool>,
    /// Graph optimization level.
    pub optimization_level: Option<OrtGraphOptimizationLevel>,
}

/// Configuration file format.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loader for pipeline configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a configuration file, auto-detecting the format from its
    /// extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.toml` or `.json` configuration file.
    ///
    /// # Returns
    ///
    /// The parsed and validated `PipelineConfig`, or a `ConfigError`
    /// describing what went wrong.
    pub fn load_from_file(path: &Path) -> Result<PipelineConfig, ClassifyError> {
        let format =
            ConfigFormat::from_extension(path).ok_or_else(|| ClassifyError::ConfigError {
                message: format!("unsupported config file extension: {:?}", path.extension()),
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| ClassifyError::ConfigError {
            message: format!("failed to read config file {}: {}", path.display(), e),
        })?;

        Self::load_from_string(&content, format)
    }

    /// Loads configuration from a string with the specified format.
    pub fn load_from_string(
        content: &str,
        format: ConfigFormat,
    ) -> Result<PipelineConfig, ClassifyError> {
        let config: PipelineConfig = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
                ClassifyError::ConfigError {
                    message: format!("failed to parse TOML config: {e}"),
                }
            })?,
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
                ClassifyError::ConfigError {
                    message: format!("failed to parse JSON config: {e}"),
                }
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input_shape, (224, 224));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.predict_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_validate_rejects_zero_top_k() {
        let config = PipelineConfig {
            top_k: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ClassifyError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = PipelineConfig {
            input_shape: (0, 224),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = PipelineConfig {
            predict_timeout_ms: Some(0),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_std() {
        let mut config = PipelineConfig::default();
        config.preprocess.std = vec![1.0, 0.0, 1.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_string() {
        let content = r#"
            input_shape = [128, 128]
            top_k = 3
            labels = ["cat", "dog"]
        "#;
        let config = ConfigLoader::load_from_string(content, ConfigFormat::Toml).unwrap();
        assert_eq!(config.input_shape, (128, 128));
        assert_eq!(config.top_k, 3);
        assert_eq!(config.labels, vec!["cat".to_string(), "dog".to_string()]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.predict_timeout_ms, Some(30_000));
    }

    #[test]
    fn test_load_from_json_string() {
        let content = r#"{"top_k": 1, "predict_timeout_ms": null}"#;
        let config = ConfigLoader::load_from_string(content, ConfigFormat::Json).unwrap();
        assert_eq!(config.top_k, 1);
        assert_eq!(config.predict_timeout_ms, None);
    }

    #[test]
    fn test_load_from_file_detects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        std::fs::write(&path, "top_k = 2\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.top_k, 2);

        let bad = dir.path().join("pipeline.yaml");
        std::fs::write(&bad, "top_k: 2\n").unwrap();
        assert!(ConfigLoader::load_from_file(&bad).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let result = ConfigLoader::load_from_string("top_k = 0", ConfigFormat::Toml);
        assert!(matches!(result, Err(ClassifyError::ConfigError { .. })));
    }
}
