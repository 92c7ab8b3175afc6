//! Class label sets for classification output.
//!
//! A [`LabelSet`] is an ordered, immutable list of unique class names whose
//! index positions line up with the model's output vector. It is built once
//! per pipeline and shared read-only by every inference call.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::core::errors::ClassifyError;

/// The flower classes of the built-in demonstration label set.
const FLOWER_CLASS_NAMES: [&str; 15] = [
    "Daisy",
    "Rose",
    "Tulip",
    "Sunflower",
    "Dandelion",
    "Iris",
    "Lily",
    "Orchid",
    "Poppy",
    "Lavender",
    "Marigold",
    "Carnation",
    "Chrysanthemum",
    "Peony",
    "Hibiscus",
];

/// An ordered, immutable set of class names.
///
/// The index of a label is the contract linking model output index to class
/// name; the set cannot be modified after construction. Labels are stored as
/// `Arc<str>` so predictions share them without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<Arc<str>>,
}

impl LabelSet {
    /// Creates a label set from a list of class names.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::ConfigError` if the list is empty or contains
    /// duplicate names.
    pub fn new(labels: Vec<String>) -> Result<Self, ClassifyError> {
        if labels.is_empty() {
            return Err(ClassifyError::config_error(
                "label set must contain at least one class name",
            ));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ClassifyError::config_error(format!(
                    "duplicate class name in label set: '{label}'"
                )));
            }
        }

        Ok(Self {
            labels: labels.into_iter().map(Arc::from).collect(),
        })
    }

    /// Loads a label set from a text file with one class name per line.
    ///
    /// Blank lines are skipped; surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::Io` if the file cannot be read, or
    /// `ClassifyError::ConfigError` if the resulting list is empty or
    /// contains duplicates.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let labels: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(labels)
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the set holds no labels. Construction rejects empty
    /// sets, so this is false for any set built through the public API.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the class name at the given index, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|label| label.as_ref())
    }

    /// Returns a shared handle to the class name at the given index, if any.
    pub fn share(&self, index: usize) -> Option<Arc<str>> {
        self.labels.get(index).cloned()
    }

    /// Returns an iterator over the class names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.as_ref())
    }
}

/// Returns the built-in 15-class flower label set used by the
/// demonstration classifier.
pub fn flower_labels() -> LabelSet {
    LabelSet {
        labels: FLOWER_CLASS_NAMES.iter().map(|name| Arc::from(*name)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_preserves_order() {
        let labels =
            LabelSet::new(vec!["cat".to_string(), "dog".to_string(), "bird".to_string()])
                .unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.name(0), Some("cat"));
        assert_eq!(labels.name(2), Some("bird"));
        assert_eq!(labels.name(3), None);
    }

    #[test]
    fn test_label_set_rejects_empty() {
        let result = LabelSet::new(vec![]);
        assert!(matches!(result, Err(ClassifyError::ConfigError { .. })));
    }

    #[test]
    fn test_label_set_rejects_duplicates() {
        let result = LabelSet::new(vec!["rose".to_string(), "rose".to_string()]);
        assert!(matches!(result, Err(ClassifyError::ConfigError { .. })));
    }

    #[test]
    fn test_flower_labels_has_fifteen_classes() {
        let labels = flower_labels();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels.name(0), Some("Daisy"));
        assert_eq!(labels.name(14), Some("Hibiscus"));
    }

    #[test]
    fn test_from_file_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        std::fs::write(&path, "Daisy\n\n  Rose  \nTulip\n").unwrap();

        let labels = LabelSet::from_file(&path).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.name(1), Some("Rose"));
    }
}
