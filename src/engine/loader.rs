//! Model artifact loader

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session};
use tracing::info;

use super::classifier::OnnxClassifier;
use super::features::FEATURE_COUNT;
use crate::models::ModelMetadata;

/// Load the serialized classifier and resolve its tensor names.
pub fn load_classifier(path: &Path, onnx_threads: usize) -> Result<OnnxClassifier> {
    anyhow::ensure!(
        path.exists(),
        "classifier artifact not found: {}",
        path.display()
    );

    ort::init().commit()?;

    info!(
        path = %path.display(),
        threads = onnx_threads,
        "Loading ONNX classifier"
    );

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(onnx_threads)?
        .commit_from_file(path)
        .with_context(|| format!("failed to load classifier from {}", path.display()))?;

    let input_name = session
        .inputs
        .first()
        .map(|i| i.name.clone())
        .unwrap_or_else(|| "float_input".to_string());

    // sklearn-onnx exports name these output_label / output_probability;
    // resolve by substring so other exporters keep working.
    let label_output = session
        .outputs
        .iter()
        .find(|o| o.name.contains("label"))
        .map(|o| o.name.clone())
        .unwrap_or_else(|| "output_label".to_string());

    let proba_output = session
        .outputs
        .iter()
        .find(|o| o.name.contains("prob"))
        .map(|o| o.name.clone())
        .unwrap_or_else(|| {
            session
                .outputs
                .last()
                .map(|o| o.name.clone())
                .unwrap_or_else(|| "output_probability".to_string())
        });

    info!(
        input = %input_name,
        label = %label_output,
        probabilities = %proba_output,
        "Classifier loaded"
    );

    Ok(OnnxClassifier {
        session,
        input_name,
        label_output,
        proba_output,
    })
}

/// Load and sanity-check the metadata JSON.
pub fn load_metadata(path: &Path) -> Result<ModelMetadata> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read model metadata from {}", path.display()))?;

    let metadata: ModelMetadata =
        serde_json::from_str(&raw).context("model metadata is not valid JSON")?;

    anyhow::ensure!(
        metadata.feature_names.len() == FEATURE_COUNT,
        "metadata lists {} feature names, expected {}",
        metadata.feature_names.len(),
        FEATURE_COUNT
    );

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_metadata(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("model_metadata.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn valid_metadata_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_metadata(
            &dir,
            &serde_json::to_string(&crate::models::metadata::sample_metadata()).unwrap(),
        );

        let metadata = load_metadata(&path).unwrap();
        assert_eq!(metadata.model_type, "RandomForestClassifier");
        assert_eq!(metadata.feature_names.len(), FEATURE_COUNT);
    }

    #[test]
    fn missing_metadata_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_metadata(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn corrupt_metadata_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_metadata(&dir, "{ not json");
        assert!(load_metadata(&path).is_err());
    }

    #[test]
    fn wrong_feature_count_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = crate::models::metadata::sample_metadata();
        metadata.feature_names.truncate(3);
        let path = write_metadata(&dir, &serde_json::to_string(&metadata).unwrap());
        assert!(load_metadata(&path).is_err());
    }

    #[test]
    fn missing_classifier_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_classifier(&dir.path().join("absent.onnx"), 1).is_err());
    }
}
