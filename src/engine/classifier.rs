//! Risk classifier adapter over ONNX Runtime.
//!
//! Wraps the loaded session behind `score(vector) -> (label, probability)`.
//! The label comes from the model's own thresholded decision output, never
//! recomputed from the probability; if the two disagree, that is classifier
//! behavior, not a fault of this layer.

use std::sync::RwLock;

use ndarray::Array2;
use ort::memory::Allocator;
use ort::session::{Session, SessionOutputs};
use ort::value::{DowncastableTarget, DynMapValueType, DynSequenceValueType, DynValue, Value};

use super::features::FEATURE_COUNT;
use crate::{AppError, AppResult};

/// One classifier verdict: the thresholded label and the positive-class
/// (fraud) probability in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub is_fraud: bool,
    pub probability: f64,
}

/// Anything that can score a feature vector. The ONNX adapter is the
/// production implementation; tests drive the orchestrator with stubs.
pub trait Classifier {
    fn score(&self, features: &[f32; FEATURE_COUNT]) -> AppResult<Score>;
}

/// Loaded ONNX classifier with its resolved tensor names
pub struct OnnxClassifier {
    pub(crate) session: Session,
    pub(crate) input_name: String,
    pub(crate) label_output: String,
    pub(crate) proba_output: String,
}

impl OnnxClassifier {
    /// Run the model on a single feature vector.
    pub fn run(&mut self, features: &[f32; FEATURE_COUNT]) -> AppResult<Score> {
        let input = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| AppError::Inference(format!("bad input shape: {e}")))?;
        let input_tensor = Value::from_array(input)
            .map_err(|e| AppError::Inference(format!("failed to create input tensor: {e}")))?;

        let outputs = self
            .session
            .run(ort::inputs![&self.input_name => input_tensor])
            .map_err(|e| AppError::Inference(format!("classifier run failed: {e}")))?;

        let is_fraud = extract_label(&outputs, &self.label_output)?;
        let probability = extract_fraud_probability(&outputs, &self.proba_output)?;

        Ok(Score {
            is_fraud,
            probability,
        })
    }
}

impl Classifier for RwLock<OnnxClassifier> {
    fn score(&self, features: &[f32; FEATURE_COUNT]) -> AppResult<Score> {
        let mut classifier = self
            .write()
            .map_err(|_| AppError::Internal("classifier lock poisoned".to_string()))?;
        classifier.run(features)
    }
}

/// Read the model's binary decision from its int64 label output.
fn extract_label(outputs: &SessionOutputs, label_output: &str) -> AppResult<bool> {
    let value = outputs.get(label_output).ok_or_else(|| {
        AppError::Inference(format!("classifier produced no `{label_output}` output"))
    })?;

    let (_, data) = value
        .try_extract_tensor::<i64>()
        .map_err(|e| AppError::Inference(format!("failed to extract label tensor: {e}")))?;

    let label = data
        .first()
        .copied()
        .ok_or_else(|| AppError::Inference("empty label output".to_string()))?;

    Ok(label != 0)
}

/// Read the fraud-class probability from the probabilities output.
///
/// sklearn-onnx exports ship it either as a plain [1, 2] float tensor or,
/// with ZipMap enabled, as seq(map(int64, float)). Both are handled.
fn extract_fraud_probability(outputs: &SessionOutputs, proba_output: &str) -> AppResult<f64> {
    let value = outputs.get(proba_output).ok_or_else(|| {
        AppError::Inference(format!("classifier produced no `{proba_output}` output"))
    })?;

    let dtype = value.dtype();

    if let Ok((shape, data)) = value.try_extract_tensor::<f32>() {
        let dims: Vec<i64> = shape.iter().copied().collect();
        return fraud_probability_from_tensor(&dims, data);
    }

    if DynSequenceValueType::can_downcast(&dtype) {
        return fraud_probability_from_sequence(value);
    }

    Err(AppError::Inference(format!(
        "unsupported probability output format for `{proba_output}`"
    )))
}

/// Pick the fraud-class column out of a probability tensor.
fn fraud_probability_from_tensor(dims: &[i64], data: &[f32]) -> AppResult<f64> {
    let class_count = match dims {
        [_, classes] => *classes as usize,
        [classes] => *classes as usize,
        _ => 0,
    };

    let probability = match class_count {
        c if c >= 2 => data.get(1),
        1 => data.first(),
        _ => None,
    };

    probability.map(|&p| p as f64).ok_or_else(|| {
        AppError::Inference(format!("probability tensor has unusable shape {dims:?}"))
    })
}

/// Extract the fraud-class probability from seq(map(int64, float)).
fn fraud_probability_from_sequence(value: &DynValue) -> AppResult<f64> {
    let allocator = Allocator::default();

    let sequence = value
        .downcast_ref::<DynSequenceValueType>()
        .map_err(|e| AppError::Inference(format!("probability output is not a sequence: {e}")))?;

    let maps = sequence
        .try_extract_sequence::<DynMapValueType>(&allocator)
        .map_err(|e| AppError::Inference(format!("failed to extract probability maps: {e}")))?;

    let class_map = maps
        .first()
        .ok_or_else(|| AppError::Inference("empty probability sequence".to_string()))?;

    let pairs = class_map
        .try_extract_key_values::<i64, f32>()
        .map_err(|e| AppError::Inference(format!("failed to read class probabilities: {e}")))?;

    for (class_id, probability) in &pairs {
        if *class_id == 1 {
            return Ok(*probability as f64);
        }
    }

    // Single-class map: derive the fraud probability from the complement.
    for (class_id, probability) in &pairs {
        if *class_id == 0 {
            return Ok(1.0 - *probability as f64);
        }
    }

    Err(AppError::Inference(
        "no class probability in output map".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_class_tensor_uses_fraud_column() {
        let p = fraud_probability_from_tensor(&[1, 2], &[0.2, 0.8]).unwrap();
        assert_eq!(p, 0.8f32 as f64);
    }

    #[test]
    fn single_column_tensor_is_taken_as_is() {
        let p = fraud_probability_from_tensor(&[1, 1], &[0.4]).unwrap();
        assert_eq!(p, 0.4f32 as f64);
    }

    #[test]
    fn flat_tensor_is_accepted() {
        let p = fraud_probability_from_tensor(&[2], &[0.9, 0.1]).unwrap();
        assert_eq!(p, 0.1f32 as f64);
    }

    #[test]
    fn degenerate_shape_is_an_inference_error() {
        let result = fraud_probability_from_tensor(&[1, 0], &[]);
        assert!(matches!(result, Err(AppError::Inference(_))));
    }
}
