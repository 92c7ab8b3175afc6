//! Top-k ranking of classification scores.

use std::cmp::Ordering;

use crate::core::errors::ClassifyError;
use crate::core::labels::LabelSet;
use crate::core::predictions::{Prediction, RankedResult};

/// A processor that pairs model scores with labels and extracts the top-k
/// most confident predictions.
///
/// Ranking is deterministic: scores sort descending with a stable sort, so
/// exact ties keep ascending original-index order. Scores pass through
/// without renormalization or clipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Topk;

impl Topk {
    /// Creates a new Topk processor.
    pub fn new() -> Self {
        Topk
    }

    /// Ranks one score vector against a label set.
    ///
    /// # Arguments
    ///
    /// * `scores` - Confidence scores for all classes, indexed like `labels`.
    /// * `labels` - The label set defining class names.
    /// * `k` - Maximum number of predictions to return. Values larger than
    ///   the class count return every class; 0 returns an empty result.
    ///
    /// # Returns
    ///
    /// A `RankedResult` with `min(k, N)` predictions sorted descending by
    /// confidence.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::ShapeMismatch` when the score vector length
    /// differs from the label count.
    pub fn rank(
        &self,
        scores: &[f32],
        labels: &LabelSet,
        k: usize,
    ) -> Result<RankedResult, ClassifyError> {
        if scores.len() != labels.len() {
            return Err(ClassifyError::shape_mismatch(labels.len(), scores.len()));
        }

        let mut indexed: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
        // Stable sort: equal confidences keep ascending index order.
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let predictions = indexed
            .into_iter()
            .take(k)
            .filter_map(|(index, score)| {
                labels.share(index).map(|label| Prediction::new(label, score))
            })
            .collect();

        Ok(RankedResult::new(predictions))
    }
}
