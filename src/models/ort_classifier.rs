//! ONNX Runtime classifier backend.
//!
//! This module provides the production [`ClassifierModel`] implementation:
//! a pool of ONNX Runtime sessions guarded by mutexes with round-robin
//! selection, so concurrent predictions do not contend on a single session.
//! The input tensor name is auto-detected from session metadata when not
//! supplied.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use ort::{
    session::{Session, builder::SessionBuilder},
    value::TensorRef,
};

use crate::core::config::{ModelConfig, OrtGraphOptimizationLevel, OrtSessionConfig};
use crate::core::errors::{ClassifyError, SimpleError};
use crate::core::tensor::{Tensor2D, Tensor4D};
use crate::core::traits::ClassifierModel;

/// Input tensor names probed when auto-detecting the model input.
const COMMON_INPUT_NAMES: [&str; 5] = ["x", "input", "images", "data", "image"];

/// A classifier backed by ONNX Runtime.
#[derive(Debug)]
pub struct OrtClassifier {
    /// Pool of ONNX Runtime sessions for concurrent predictions.
    sessions: Vec<Mutex<Session>>,
    /// Next index for round-robin session selection.
    next_idx: AtomicUsize,
    /// The name of the input tensor.
    input_name: String,
    /// The name of the output tensor (read from metadata when unset).
    output_name: Option<String>,
    /// The path to the model file for error context.
    model_path: PathBuf,
    /// The model name for logs and error context.
    model_name: String,
}

impl OrtClassifier {
    /// Creates a classifier with default ONNX Runtime settings and a single
    /// session, auto-detecting the input tensor name.
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        Self::from_config(&ModelConfig::default(), model_path)
    }

    /// Creates a classifier from a model configuration, applying session
    /// options and constructing a session pool for concurrent predictions.
    ///
    /// # Arguments
    ///
    /// * `config` - Model configuration (pool size, session options, names).
    /// * `model_path` - Path to the ONNX model file.
    pub fn from_config(
        config: &ModelConfig,
        model_path: impl AsRef<Path>,
    ) -> Result<Self, ClassifyError> {
        let path = model_path.as_ref();
        let pool_size = config.session_pool_size.unwrap_or(1).max(1);

        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let builder = Session::builder()?;
            let builder = if let Some(cfg) = &config.ort_session {
                Self::apply_ort_config(builder, cfg)?
            } else {
                builder
            };
            let session = builder.commit_from_file(path).map_err(|e| {
                ClassifyError::inference_error(
                    path.file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown_model"),
                    format!(
                        "failed to create ONNX session from '{}'; verify the model path and session options",
                        path.display()
                    ),
                    e,
                )
            })?;
            sessions.push(Mutex::new(session));
        }

        let input_name = match &config.input_name {
            Some(name) => name.clone(),
            None => Self::detect_input_name(&sessions[0])?,
        };

        let model_name = config
            .model_name
            .clone()
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "unknown_model".to_string());

        Ok(Self {
            sessions,
            next_idx: AtomicUsize::new(0),
            input_name,
            output_name: None,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    fn apply_ort_config(
        mut builder: SessionBuilder,
        cfg: &OrtSessionConfig,
    ) -> Result<SessionBuilder, ort::Error> {
        if let Some(intra) = cfg.intra_threads {
            builder = builder.with_intra_threads(intra)?;
        }
        if let Some(inter) = cfg.inter_threads {
            builder = builder.with_inter_threads(inter)?;
        }
        if let Some(par) = cfg.parallel_execution {
            builder = builder.with_parallel_execution(par)?;
        }
        if let Some(level) = cfg.optimization_level {
            use ort::session::builder::GraphOptimizationLevel as GOL;
            let mapped = match level {
                OrtGraphOptimizationLevel::DisableAll => GOL::Disable,
                OrtGraphOptimizationLevel::Level1 => GOL::Level1,
                OrtGraphOptimizationLevel::Level2 => GOL::Level2,
                OrtGraphOptimizationLevel::Level3 => GOL::Level3,
                OrtGraphOptimizationLevel::All => GOL::Level3,
            };
            builder = builder.with_optimization_level(mapped)?;
        }
        Ok(builder)
    }

    /// Picks the input tensor name from session metadata, preferring the
    /// common names probed in order.
    fn detect_input_name(session: &Mutex<Session>) -> Result<String, ClassifyError> {
        let session = session.lock().map_err(|_| {
            ClassifyError::invalid_input("failed to acquire session lock for input detection")
        })?;

        let available: Vec<String> = session
            .inputs
            .iter()
            .map(|input| input.name.clone())
            .collect();

        let name = COMMON_INPUT_NAMES
            .iter()
            .find(|&candidate| available.iter().any(|input| input == candidate))
            .map(|s| s.to_string())
            .or_else(|| available.first().cloned())
            .unwrap_or_else(|| "x".to_string());
        Ok(name)
    }

    /// Gets the name of the output tensor.
    fn output_name(&self) -> Result<String, ClassifyError> {
        if let Some(ref name) = self.output_name {
            return Ok(name.clone());
        }
        let session = self.sessions[0].lock().map_err(|_| {
            ClassifyError::invalid_input("failed to acquire session lock for output detection")
        })?;
        session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| {
                ClassifyError::invalid_input(
                    "no outputs available in session; model may be invalid or corrupted",
                )
            })
    }

    /// Gets the path to the model file.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Gets the name of the model.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Runs inference and returns the raw `batch x num_classes` score matrix.
    fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
        let input_shape = x.shape().to_vec();
        let batch_size = input_shape[0];
        let output_name = self.output_name()?;

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            ClassifyError::inference_error(
                &self.model_name,
                format!("failed to convert input tensor with shape {input_shape:?}"),
                e,
            )
        })?;
        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        // Round-robin select a session.
        let idx = self.next_idx.fetch_add(1, Ordering::Relaxed) % self.sessions.len();
        let mut session = self.sessions[idx].lock().map_err(|_| {
            ClassifyError::inference_error(
                &self.model_name,
                format!("failed to acquire session lock {}/{}", idx, self.sessions.len()),
                SimpleError::new("session lock acquisition failed"),
            )
        })?;

        let outputs = session.run(inputs).map_err(|e| {
            ClassifyError::inference_error(
                &self.model_name,
                format!(
                    "ONNX Runtime inference failed with input '{}' -> output '{}'",
                    self.input_name, output_name
                ),
                e,
            )
        })?;

        let (output_shape, output_data) = outputs[output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                ClassifyError::inference_error(
                    &self.model_name,
                    format!("failed to extract output tensor '{output_name}' as f32"),
                    e,
                )
            })?;

        let output_dims: &[i64] = output_shape;
        if output_dims.len() != 2 {
            return Err(ClassifyError::inference_error(
                &self.model_name,
                format!(
                    "expected 2D output tensor, got {}D with shape {output_dims:?}",
                    output_dims.len()
                ),
                SimpleError::new("invalid output tensor dimensions"),
            ));
        }

        let num_classes = output_dims[1] as usize;
        let expected_len = batch_size * num_classes;
        if output_data.len() != expected_len {
            return Err(ClassifyError::inference_error(
                &self.model_name,
                format!(
                    "output data size mismatch: expected {expected_len}, got {}",
                    output_data.len()
                ),
                SimpleError::new("output tensor data size mismatch"),
            ));
        }

        let view = ndarray::ArrayView2::from_shape((batch_size, num_classes), output_data)
            .map_err(ClassifyError::Tensor)?;
        Ok(view.to_owned())
    }
}

impl ClassifierModel for OrtClassifier {
    fn predict(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
        self.infer_2d(input)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
