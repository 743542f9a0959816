//! Scoring engine
//!
//! Owns the loaded model artifacts and everything between a parsed
//! transaction and a risk-bucketed prediction: feature assembly, the ONNX
//! classifier adapter, and single/batch orchestration.

pub mod classifier;
pub mod features;
pub mod loader;
pub mod scoring;

pub use classifier::{Classifier, OnnxClassifier};
pub use features::{FeatureExtractor, FEATURE_COUNT, FEATURE_NAMES};
pub use scoring::MAX_BATCH_SIZE;

use std::path::Path;
use std::sync::RwLock;

use crate::config::Config;
use crate::models::ModelMetadata;
use crate::{AppError, AppResult};

/// Process-wide holder for the loaded classifier and its metadata.
///
/// Constructed exactly once at startup and shared read-only behind an `Arc`
/// afterwards; there is no hot reload. The classifier sits in an `RwLock`
/// only because an ONNX session needs `&mut` to run.
pub struct ModelState {
    classifier: Option<RwLock<OnnxClassifier>>,
    metadata: Option<ModelMetadata>,
}

impl ModelState {
    /// Load both artifacts, best-effort.
    ///
    /// Any load failure is logged and leaves the corresponding field empty,
    /// so the service starts unhealthy instead of crash-looping. A metadata
    /// record whose feature order disagrees with the serving order also
    /// discards the classifier: a mis-ordered model would score silently
    /// wrong, which is worse than returning 503.
    pub fn initialize(config: &Config) -> Self {
        let metadata = match loader::load_metadata(Path::new(&config.metadata_path)) {
            Ok(metadata) => {
                tracing::info!(
                    model_type = %metadata.model_type,
                    accuracy = metadata.accuracy,
                    training_date = %metadata.training_date,
                    "Model metadata loaded"
                );
                Some(metadata)
            }
            Err(err) => {
                tracing::error!("Failed to load model metadata: {err:#}");
                None
            }
        };

        let mut classifier =
            match loader::load_classifier(Path::new(&config.model_path), config.onnx_threads) {
                Ok(classifier) => Some(classifier),
                Err(err) => {
                    tracing::error!("Failed to load classifier: {err:#}");
                    None
                }
            };

        if classifier.is_some() {
            if let Some(metadata) = &metadata {
                if !feature_order_matches(metadata) {
                    tracing::error!(
                        expected = ?FEATURE_NAMES,
                        found = ?metadata.feature_names,
                        "Metadata feature order does not match the serving order; scoring disabled"
                    );
                    classifier = None;
                }
            }
        }

        Self {
            classifier: classifier.map(RwLock::new),
            metadata,
        }
    }

    /// True iff the classifier is loaded. Metadata absence alone does not
    /// block scoring.
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// The loaded classifier, or a service-unavailable error.
    pub fn classifier(&self) -> AppResult<&RwLock<OnnxClassifier>> {
        self.classifier.as_ref().ok_or(AppError::ModelUnavailable)
    }

    /// The metadata record for `/api/model-info`. Requires both artifacts.
    pub fn describe(&self) -> AppResult<&ModelMetadata> {
        if self.classifier.is_none() {
            return Err(AppError::ModelUnavailable);
        }
        self.metadata.as_ref().ok_or(AppError::ModelUnavailable)
    }

    /// Model version reported by `/health` (the training date).
    pub fn version(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.training_date.as_str())
    }

    #[cfg(test)]
    pub(crate) fn unloaded() -> Self {
        Self {
            classifier: None,
            metadata: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_metadata_only(metadata: ModelMetadata) -> Self {
        Self {
            classifier: None,
            metadata: Some(metadata),
        }
    }
}

/// Check that the metadata's training column order equals the serving order.
pub fn feature_order_matches(metadata: &ModelMetadata) -> bool {
    metadata.feature_names.len() == FEATURE_COUNT
        && metadata
            .feature_names
            .iter()
            .map(String::as_str)
            .eq(FEATURE_NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metadata::sample_metadata;

    #[test]
    fn unloaded_state_is_not_ready() {
        let state = ModelState::unloaded();
        assert!(!state.is_ready());
        assert!(matches!(state.classifier(), Err(AppError::ModelUnavailable)));
        assert!(matches!(state.describe(), Err(AppError::ModelUnavailable)));
    }

    #[test]
    fn metadata_alone_does_not_unlock_model_info() {
        let state = ModelState::with_metadata_only(sample_metadata());
        assert!(!state.is_ready());
        assert!(matches!(state.describe(), Err(AppError::ModelUnavailable)));
        assert_eq!(state.version(), Some("2026-08-01T09:30:00"));
    }

    #[test]
    fn initialize_survives_missing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            port: 8000,
            model_path: dir.path().join("missing.onnx").display().to_string(),
            metadata_path: dir.path().join("missing.json").display().to_string(),
            onnx_threads: 1,
            environment: "test".to_string(),
        };

        let state = ModelState::initialize(&config);
        assert!(!state.is_ready());
        assert!(state.version().is_none());
    }

    #[test]
    fn matching_feature_order_is_accepted() {
        assert!(feature_order_matches(&sample_metadata()));
    }

    #[test]
    fn swapped_feature_order_is_rejected() {
        let mut metadata = sample_metadata();
        metadata.feature_names.swap(0, 1);
        assert!(!feature_order_matches(&metadata));
    }

    #[test]
    fn truncated_feature_list_is_rejected() {
        let mut metadata = sample_metadata();
        metadata.feature_names.pop();
        assert!(!feature_order_matches(&metadata));
    }
}
