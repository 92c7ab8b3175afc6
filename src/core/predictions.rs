//! Prediction result types produced by the pipeline.
//!
//! A [`Prediction`] pairs one class label with the raw confidence the model
//! assigned to it; a [`RankedResult`] is the ordered, truncated list of
//! predictions a classification call returns. Confidence values are passed
//! through exactly as the model produced them; rounding happens only in the
//! presentation helpers.

use std::sync::Arc;

/// A single class prediction: label plus model-assigned confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The class name, shared with the pipeline's label set.
    pub label: Arc<str>,
    /// The raw confidence score from the model. Not guaranteed to be
    /// normalized; treated as-is.
    pub confidence: f32,
}

impl Prediction {
    /// Creates a new prediction.
    pub fn new(label: Arc<str>, confidence: f32) -> Self {
        Self { label, confidence }
    }

    /// Returns the confidence as a percentage rounded to one decimal place,
    /// the presentation used by the reference display layer.
    pub fn percentage(&self) -> f32 {
        (self.confidence * 1000.0).round() / 10.0
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}%)", self.label, self.percentage())
    }
}

/// An ordered list of top-K predictions, sorted descending by confidence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult {
    predictions: Vec<Prediction>,
}

impl RankedResult {
    /// Creates a ranked result from an already-sorted prediction list.
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }

    /// Returns the number of predictions in the result.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Returns true if the result holds no predictions.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Returns the highest-confidence prediction, if any.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    /// Returns the predictions in rank order.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Returns an iterator over the predictions in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.predictions.iter()
    }

    /// Consumes the result, returning the underlying prediction list.
    pub fn into_predictions(self) -> Vec<Prediction> {
        self.predictions
    }
}

impl IntoIterator for RankedResult {
    type Item = Prediction;
    type IntoIter = std::vec::IntoIter<Prediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: &str, confidence: f32) -> Prediction {
        Prediction::new(Arc::from(label), confidence)
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(prediction("Rose", 0.30).percentage(), 30.0);
        assert_eq!(prediction("Rose", 0.12345).percentage(), 12.3);
        assert_eq!(prediction("Rose", 0.99999).percentage(), 100.0);
        assert_eq!(prediction("Rose", 0.0).percentage(), 0.0);
    }

    #[test]
    fn test_display_formats_label_and_percentage() {
        let text = prediction("Tulip", 0.305).to_string();
        assert_eq!(text, "Tulip (30.5%)");
    }

    #[test]
    fn test_ranked_result_accessors() {
        let result = RankedResult::new(vec![
            prediction("Rose", 0.9),
            prediction("Daisy", 0.1),
        ]);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.top().unwrap().label.as_ref(), "Rose");

        let labels: Vec<&str> = result.iter().map(|p| p.label.as_ref()).collect();
        assert_eq!(labels, vec!["Rose", "Daisy"]);
    }
}
