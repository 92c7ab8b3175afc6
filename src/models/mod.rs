//! Model backends implementing the classifier capability.

pub mod ort_classifier;

pub use ort_classifier::OrtClassifier;
