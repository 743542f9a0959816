//! Prediction result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a fraud probability.
    ///
    /// Half-open intervals: [0, 0.3) LOW, [0.3, 0.7) MEDIUM, [0.7, 1] HIGH.
    /// Exact boundary values land in the upper bucket.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            RiskLevel::Low
        } else if probability < 0.7 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Outcome of scoring one transaction
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub is_fraud: bool,
    pub fraud_probability: f64,
    pub risk_level: RiskLevel,
}

/// Aggregate outcome of scoring an ordered batch.
///
/// `results[i]` corresponds to the i-th input transaction.
#[derive(Debug)]
pub struct BatchScores {
    pub total_count: usize,
    pub fraud_count: usize,
    pub results: Vec<Prediction>,
}

/// Response body for `/api/predict`
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub is_fraud: bool,
    pub fraud_probability: f64,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
}

impl PredictionResponse {
    pub fn new(prediction: Prediction) -> Self {
        Self {
            is_fraud: prediction.is_fraud,
            fraud_probability: prediction.fraud_probability,
            risk_level: prediction.risk_level,
            timestamp: Utc::now(),
        }
    }
}

/// Response body for `/api/batch-predict`
#[derive(Debug, Serialize)]
pub struct BatchPredictionResponse {
    pub total_count: usize,
    pub fraud_count: usize,
    pub results: Vec<Prediction>,
    pub timestamp: DateTime<Utc>,
}

impl BatchPredictionResponse {
    pub fn new(batch: BatchScores) -> Self {
        Self {
            total_count: batch.total_count,
            fraud_count: batch.fraud_count,
            results: batch.results,
            timestamp: Utc::now(),
        }
    }
}
