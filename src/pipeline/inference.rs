//! The inference pipeline orchestrating preprocess, predict, and rank.
//!
//! [`InferencePipeline`] owns a preprocessor, a ranker, and an injected
//! [`ClassifierModel`] capability, and drives them end-to-end per request
//! under an explicit lifecycle state machine:
//!
//! ```text
//! Uninitialized -> Ready -> (Busy <-> Ready)
//!        \-> Failed (initialization errors only)
//! ```
//!
//! Model invocations are serialized per pipeline; preprocessing of different
//! images runs outside the critical section and may overlap freely. An
//! optional deadline bounds each model invocation so an unresponsive model
//! cannot hang callers indefinitely.

use std::path::Path;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use image::RgbImage;
use tracing::{debug, info, warn};

use crate::core::config::PipelineConfig;
use crate::core::errors::{ClassifyError, SimpleError};
use crate::core::labels::{LabelSet, flower_labels};
use crate::core::predictions::RankedResult;
use crate::core::tensor::{Tensor2D, Tensor4D};
use crate::core::traits::ClassifierModel;
use crate::pipeline::stats::{PipelineStats, StatsManager};
use crate::processors::{ImagePreprocessor, Topk};
use crate::utils::image::{decode_image, load_image};

/// Lifecycle state of an [`InferencePipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Constructed but not yet initialized; classification is rejected.
    Uninitialized,
    /// Initialized and able to serve classification requests.
    Ready,
    /// A model invocation is in flight.
    Busy,
    /// Initialization failed; classification is rejected until a successful
    /// re-initialization.
    Failed,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineState::Uninitialized => write!(f, "uninitialized"),
            PipelineState::Ready => write!(f, "ready"),
            PipelineState::Busy => write!(f, "busy"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// End-to-end classification pipeline.
///
/// Construct with [`InferencePipeline::new`] or
/// [`InferencePipelineBuilder`], call [`initialize`](Self::initialize) once,
/// then [`classify`](Self::classify) per image. The pipeline is `Send +
/// Sync`; concurrent callers are serialized around the model invocation.
pub struct InferencePipeline {
    config: PipelineConfig,
    labels: LabelSet,
    preprocessor: ImagePreprocessor,
    ranker: Topk,
    model: Arc<dyn ClassifierModel>,
    state: Mutex<PipelineState>,
    infer_lock: Mutex<()>,
    stats: StatsManager,
}

impl InferencePipeline {
    /// Creates a pipeline from a validated configuration and an injected
    /// model capability. The pipeline starts `Uninitialized`.
    ///
    /// An empty `config.labels` selects the built-in flower label set.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::ConfigError` if the configuration or label
    /// list is invalid.
    pub fn new(
        config: PipelineConfig,
        model: Arc<dyn ClassifierModel>,
    ) -> Result<Self, ClassifyError> {
        config.validate()?;
        let labels = if config.labels.is_empty() {
            flower_labels()
        } else {
            LabelSet::new(config.labels.clone())?
        };
        let preprocessor = ImagePreprocessor::from_config(config.input_shape, &config.preprocess)?;

        Ok(Self {
            config,
            labels,
            preprocessor,
            ranker: Topk::new(),
            model,
            state: Mutex::new(PipelineState::Uninitialized),
            infer_lock: Mutex::new(()),
            stats: StatsManager::new(),
        })
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> PipelineState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the label set the pipeline classifies against.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Returns a snapshot of the run statistics. Only model invocations are
    /// counted; preprocessing and ranking failures do not appear here.
    pub fn stats(&self) -> PipelineStats {
        self.stats.snapshot()
    }

    /// Resets the run statistics to zero.
    pub fn reset_stats(&self) {
        self.stats.reset()
    }

    /// Initializes the pipeline: checks model readiness and runs a self-test
    /// that verifies the model's output width against the label count.
    ///
    /// Idempotent: a no-op when the pipeline is already `Ready`; a fresh
    /// attempt when `Uninitialized` or `Failed`.
    ///
    /// # Errors
    ///
    /// `ClassifyError::ModelNotReady` if the model has not signalled
    /// readiness, `ClassifyError::ShapeMismatch` if the self-test output
    /// width disagrees with the label set, or any error the model raised.
    /// On error the pipeline transitions to `Failed`.
    pub fn initialize(&self) -> Result<(), ClassifyError> {
        {
            let state = self.lock_state()?;
            if matches!(*state, PipelineState::Ready | PipelineState::Busy) {
                debug!("initialize called on a ready pipeline; nothing to do");
                return Ok(());
            }
        }

        match self.self_test() {
            Ok(()) => {
                self.set_state(PipelineState::Ready)?;
                info!(
                    model = self.model.name(),
                    classes = self.labels.len(),
                    "inference pipeline initialized"
                );
                Ok(())
            }
            Err(e) => {
                self.set_state(PipelineState::Failed)?;
                warn!(error = %e, "pipeline initialization failed");
                Err(e)
            }
        }
    }

    /// Classifies one image, returning the configured number of top
    /// predictions.
    ///
    /// # Errors
    ///
    /// `ClassifyError::PipelineNotReady` when invoked while `Uninitialized`
    /// or `Failed`; otherwise any preprocessing, inference, or ranking error
    /// propagates unchanged.
    pub fn classify(&self, image: &RgbImage) -> Result<RankedResult, ClassifyError> {
        self.classify_with_top_k(image, self.config.top_k)
    }

    /// Classifies one image with a per-call top-k override.
    pub fn classify_with_top_k(
        &self,
        image: &RgbImage,
        top_k: usize,
    ) -> Result<RankedResult, ClassifyError> {
        self.ensure_ready()?;
        let tensor = self.preprocessor.preprocess(image)?;
        let output = self.run_model(&tensor)?;
        let scores = output.row(0).to_vec();
        let result = self.ranker.rank(&scores, &self.labels, top_k)?;
        if let Some(top) = result.top() {
            debug!(
                label = %top.label,
                confidence = top.confidence,
                "classification complete"
            );
        }
        Ok(result)
    }

    /// Decodes an encoded image byte stream and classifies it.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<RankedResult, ClassifyError> {
        self.ensure_ready()?;
        let image = decode_image(bytes)?;
        self.classify(&image)
    }

    /// Loads an image file and classifies it.
    pub fn classify_path(&self, path: impl AsRef<Path>) -> Result<RankedResult, ClassifyError> {
        self.ensure_ready()?;
        let image = load_image(path.as_ref())?;
        self.classify(&image)
    }

    /// Classifies several images with a single model invocation.
    ///
    /// All images are preprocessed into one batch tensor; the model runs
    /// once and each output row is ranked independently. An empty slice
    /// returns an empty vec without touching the model.
    pub fn classify_batch(
        &self,
        images: &[RgbImage],
    ) -> Result<Vec<RankedResult>, ClassifyError> {
        self.ensure_ready()?;
        if images.is_empty() {
            return Ok(Vec::new());
        }

        let tensor = self.preprocessor.preprocess_batch(images)?;
        let output = self.run_model(&tensor)?;
        output
            .outer_iter()
            .map(|row| self.ranker.rank(&row.to_vec(), &self.labels, self.config.top_k))
            .collect()
    }

    /// Runs the model self-test: a zero tensor through `predict`, output
    /// width checked against the label count.
    fn self_test(&self) -> Result<(), ClassifyError> {
        if !self.model.is_ready() {
            return Err(ClassifyError::model_not_ready(self.model.name()));
        }
        let (d1, d2, d3) = self.preprocessor.image_dims();
        let probe = Tensor4D::zeros((1, d1, d2, d3));
        let output = self.model.predict(&probe)?;
        if output.ncols() != self.labels.len() {
            return Err(ClassifyError::shape_mismatch(
                self.labels.len(),
                output.ncols(),
            ));
        }
        Ok(())
    }

    /// Runs one serialized model invocation, tracking state, timing, and the
    /// optional deadline.
    fn run_model(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
        let _guard = self
            .infer_lock
            .lock()
            .map_err(|_| ClassifyError::invalid_input("inference lock poisoned"))?;

        if !self.model.is_ready() {
            return Err(ClassifyError::model_not_ready(self.model.name()));
        }

        self.set_state(PipelineState::Busy)?;
        let started = Instant::now();
        let result = match self.config.predict_timeout() {
            Some(timeout) => predict_with_deadline(Arc::clone(&self.model), input.clone(), timeout),
            None => self.model.predict(input),
        };
        let elapsed = started.elapsed();
        self.set_state(PipelineState::Ready)?;
        self.stats.record(elapsed, result.is_ok());

        let elapsed_ms = elapsed.as_millis() as u64;
        debug!(elapsed_ms, ok = result.is_ok(), "model invocation finished");
        result
    }

    fn ensure_ready(&self) -> Result<(), ClassifyError> {
        let state = *self.lock_state()?;
        match state {
            PipelineState::Ready | PipelineState::Busy => Ok(()),
            other => Err(ClassifyError::PipelineNotReady { state: other }),
        }
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, PipelineState>, ClassifyError> {
        self.state
            .lock()
            .map_err(|_| ClassifyError::invalid_input("pipeline state lock poisoned"))
    }

    fn set_state(&self, next: PipelineState) -> Result<(), ClassifyError> {
        *self.lock_state()? = next;
        Ok(())
    }
}

impl std::fmt::Debug for InferencePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferencePipeline")
            .field("model", &self.model.name())
            .field("classes", &self.labels.len())
            .field("state", &self.state())
            .finish()
    }
}

/// Runs `predict` on a worker thread, bounding the wait with a deadline.
///
/// On timeout the worker is detached; its eventual result is discarded.
fn predict_with_deadline(
    model: Arc<dyn ClassifierModel>,
    input: Tensor4D,
    timeout: Duration,
) -> Result<Tensor2D, ClassifyError> {
    let model_name = model.name().to_string();
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name("classify-predict".to_string())
        .spawn(move || {
            let _ = tx.send(model.predict(&input));
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(ClassifyError::InferenceTimeout {
            timeout_ms: timeout.as_millis() as u64,
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(ClassifyError::inference_error(
            model_name,
            "prediction worker terminated before returning a result",
            SimpleError::new("worker channel disconnected"),
        )),
    }
}

/// Builder for [`InferencePipeline`].
pub struct InferencePipelineBuilder {
    config: PipelineConfig,
    model: Option<Arc<dyn ClassifierModel>>,
}

impl InferencePipelineBuilder {
    /// Creates a builder with the default configuration and no model.
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            model: None,
        }
    }

    /// Replaces the entire configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the model input shape as (height, width).
    pub fn input_shape(mut self, input_shape: (u32, u32)) -> Self {
        self.config.input_shape = input_shape;
        self
    }

    /// Sets the number of top predictions returned per image.
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Sets the class labels in model output order.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.config.labels = labels;
        self
    }

    /// Sets the model invocation deadline in milliseconds; `None` disables
    /// the deadline.
    pub fn predict_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.config.predict_timeout_ms = timeout_ms;
        self
    }

    /// Sets the classifier model capability.
    pub fn model(mut self, model: impl ClassifierModel + 'static) -> Self {
        self.model = Some(Arc::new(model));
        self
    }

    /// Sets an already-shared classifier model capability.
    pub fn shared_model(mut self, model: Arc<dyn ClassifierModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Builds the pipeline.
    ///
    /// # Errors
    ///
    /// `ClassifyError::ConfigError` if no model was supplied or the
    /// configuration is invalid.
    pub fn build(self) -> Result<InferencePipeline, ClassifyError> {
        let model = self
            .model
            .ok_or_else(|| ClassifyError::config_error("a classifier model is required"))?;
        InferencePipeline::new(self.config, model)
    }
}

impl Default for InferencePipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Stub model returning a fixed score row for every image in the batch.
    struct StubModel {
        scores: Vec<f32>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn new(scores: Vec<f32>) -> Self {
            Self {
                scores,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ClassifierModel for StubModel {
        fn predict(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let batch = input.shape()[0];
            let mut data = Vec::with_capacity(batch * self.scores.len());
            for _ in 0..batch {
                data.extend_from_slice(&self.scores);
            }
            Ok(Tensor2D::from_shape_vec((batch, self.scores.len()), data).unwrap())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Stub model that never becomes ready.
    struct NotReadyModel;

    impl ClassifierModel for NotReadyModel {
        fn predict(&self, _input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
            Err(ClassifyError::invalid_input(
                "predict called on a model that is not ready",
            ))
        }

        fn is_ready(&self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "not-ready"
        }
    }

    /// Stub model whose readiness can be flipped by the test.
    struct ToggleModel {
        ready: AtomicBool,
        inner: StubModel,
    }

    impl ClassifierModel for ToggleModel {
        fn predict(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
            self.inner.predict(input)
        }

        fn is_ready(&self) -> bool {
            self.ready.load(Ordering::SeqCst)
        }

        fn name(&self) -> &str {
            "toggle"
        }
    }

    /// Stub model that sleeps once after being armed, then behaves normally.
    struct SlowOnceModel {
        delay: Duration,
        armed: AtomicBool,
        inner: StubModel,
    }

    impl SlowOnceModel {
        fn new(delay: Duration, scores: Vec<f32>) -> Self {
            Self {
                delay,
                armed: AtomicBool::new(false),
                inner: StubModel::new(scores),
            }
        }
    }

    impl ClassifierModel for SlowOnceModel {
        fn predict(&self, input: &Tensor4D) -> Result<Tensor2D, ClassifyError> {
            if self.armed.swap(false, Ordering::SeqCst) {
                thread::sleep(self.delay);
            }
            self.inner.predict(input)
        }

        fn name(&self) -> &str {
            "slow-once"
        }
    }

    fn flower_scores() -> Vec<f32> {
        let mut scores = vec![0.05; 14];
        scores.push(0.30);
        scores
    }

    fn small_config() -> PipelineConfig {
        PipelineConfig {
            input_shape: (16, 16),
            ..PipelineConfig::default()
        }
    }

    fn test_image() -> RgbImage {
        RgbImage::from_pixel(32, 24, Rgb([120, 80, 200]))
    }

    #[test]
    fn test_classify_before_initialize_fails_without_model_call() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model.clone()).unwrap();
        assert_eq!(pipeline.state(), PipelineState::Uninitialized);

        let err = pipeline.classify(&test_image()).unwrap_err();
        assert!(matches!(err, ClassifyError::PipelineNotReady { .. }));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_end_to_end_flower_scenario() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model.clone()).unwrap();
        pipeline.initialize().unwrap();
        assert_eq!(pipeline.state(), PipelineState::Ready);

        let result = pipeline.classify(&test_image()).unwrap();
        assert_eq!(result.len(), 5);
        let top = result.top().unwrap();
        assert_eq!(top.label.as_ref(), "Hibiscus");
        assert!((top.confidence - 0.30).abs() < 1e-6);
        assert_eq!(top.percentage(), 30.0);

        // One self-test invocation plus one classification.
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_initialize_is_idempotent_when_ready() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model.clone()).unwrap();
        pipeline.initialize().unwrap();
        pipeline.initialize().unwrap();
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_self_test_shape_mismatch_moves_to_failed() {
        // 10 output classes against the 15-label flower set.
        let model = Arc::new(StubModel::new(vec![0.1; 10]));
        let pipeline = InferencePipeline::new(small_config(), model).unwrap();

        let err = pipeline.initialize().unwrap_err();
        match err {
            ClassifyError::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, 15);
                assert_eq!(actual, 10);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(matches!(
            pipeline.classify(&test_image()),
            Err(ClassifyError::PipelineNotReady { .. })
        ));
    }

    #[test]
    fn test_initialize_rejects_model_that_is_not_ready() {
        let pipeline =
            InferencePipeline::new(small_config(), Arc::new(NotReadyModel)).unwrap();
        let err = pipeline.initialize().unwrap_err();
        assert!(matches!(err, ClassifyError::ModelNotReady { .. }));
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }

    #[test]
    fn test_initialize_retries_after_failure() {
        let model = Arc::new(ToggleModel {
            ready: AtomicBool::new(false),
            inner: StubModel::new(flower_scores()),
        });
        let pipeline = InferencePipeline::new(small_config(), model.clone()).unwrap();

        assert!(pipeline.initialize().is_err());
        assert_eq!(pipeline.state(), PipelineState::Failed);

        model.ready.store(true, Ordering::SeqCst);
        pipeline.initialize().unwrap();
        assert_eq!(pipeline.state(), PipelineState::Ready);
        assert!(pipeline.classify(&test_image()).is_ok());
    }

    #[test]
    fn test_timeout_fails_call_and_leaves_pipeline_ready() {
        let model = Arc::new(SlowOnceModel::new(
            Duration::from_millis(400),
            flower_scores(),
        ));
        let config = PipelineConfig {
            predict_timeout_ms: Some(50),
            ..small_config()
        };
        let pipeline = InferencePipeline::new(config, model.clone()).unwrap();
        pipeline.initialize().unwrap();

        model.armed.store(true, Ordering::SeqCst);
        let err = pipeline.classify(&test_image()).unwrap_err();
        match err {
            ClassifyError::InferenceTimeout { timeout_ms } => assert_eq!(timeout_ms, 50),
            other => panic!("expected InferenceTimeout, got {other:?}"),
        }

        // The failed call returns the pipeline to Ready and the next call
        // succeeds.
        assert_eq!(pipeline.state(), PipelineState::Ready);
        assert!(pipeline.classify(&test_image()).is_ok());
    }

    #[test]
    fn test_classify_with_top_k_override() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model).unwrap();
        pipeline.initialize().unwrap();

        let result = pipeline
            .classify_with_top_k(&test_image(), 3)
            .unwrap();
        assert_eq!(result.len(), 3);

        // Larger than the class count returns every class.
        let result = pipeline
            .classify_with_top_k(&test_image(), 100)
            .unwrap();
        assert_eq!(result.len(), 15);
    }

    #[test]
    fn test_classify_batch_runs_model_once() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model.clone()).unwrap();
        pipeline.initialize().unwrap();

        let images = vec![test_image(), test_image(), test_image()];
        let results = pipeline.classify_batch(&images).unwrap();
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.len(), 5);
            assert_eq!(result.top().unwrap().label.as_ref(), "Hibiscus");
        }
        // Self-test plus one batched invocation.
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);

        assert!(pipeline.classify_batch(&[]).unwrap().is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_classify_bytes_decodes_and_classifies() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model).unwrap();
        pipeline.initialize().unwrap();

        let mut encoded = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut encoded);
        image::DynamicImage::ImageRgb8(test_image())
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();

        let result = pipeline.classify_bytes(&encoded).unwrap();
        assert_eq!(result.top().unwrap().label.as_ref(), "Hibiscus");

        let err = pipeline.classify_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ClassifyError::ImageDecode(_)));
    }

    #[test]
    fn test_stats_count_model_invocations() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = InferencePipeline::new(small_config(), model).unwrap();
        pipeline.initialize().unwrap();

        pipeline.classify(&test_image()).unwrap();
        pipeline.classify(&test_image()).unwrap();

        let stats = pipeline.stats();
        assert_eq!(stats.total_processed, 2);
        assert_eq!(stats.successful_predictions, 2);
        assert_eq!(stats.failed_predictions, 0);

        pipeline.reset_stats();
        assert_eq!(pipeline.stats().total_processed, 0);
    }

    #[test]
    fn test_concurrent_classify_serializes_model_calls() {
        let model = Arc::new(StubModel::new(flower_scores()));
        let pipeline = Arc::new(InferencePipeline::new(small_config(), model).unwrap());
        pipeline.initialize().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pipeline = Arc::clone(&pipeline);
                thread::spawn(move || pipeline.classify(&test_image()))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert_eq!(pipeline.stats().total_processed, 4);
        assert_eq!(pipeline.state(), PipelineState::Ready);
    }

    #[test]
    fn test_builder_requires_model() {
        let result = InferencePipelineBuilder::new().build();
        assert!(matches!(result, Err(ClassifyError::ConfigError { .. })));
    }

    #[test]
    fn test_builder_with_custom_labels() {
        let pipeline = InferencePipelineBuilder::new()
            .input_shape((16, 16))
            .labels(vec!["cat".to_string(), "dog".to_string()])
            .top_k(1)
            .model(StubModel::new(vec![0.2, 0.8]))
            .build()
            .unwrap();
        pipeline.initialize().unwrap();

        let result = pipeline.classify(&test_image()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.top().unwrap().label.as_ref(), "dog");
    }
}
