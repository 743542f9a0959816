//! Trained-model metadata

use serde::{Deserialize, Serialize};

/// Metadata record the training pipeline writes next to the classifier
/// artifact. `feature_names` carries the column order the model was fitted
/// on and is checked against the serving order at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_type: String,
    pub n_estimators: u32,
    pub max_depth: u32,
    pub training_date: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc_roc: f64,
    pub feature_names: Vec<String>,
}

/// Evaluation metrics block of `/api/model-info`
#[derive(Debug, Serialize)]
pub struct ModelPerformance {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc_roc: f64,
}

/// Hyperparameter block of `/api/model-info`
#[derive(Debug, Serialize)]
pub struct ModelParameters {
    pub n_estimators: u32,
    pub max_depth: u32,
}

/// Response body for `/api/model-info`
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_type: String,
    pub training_date: String,
    pub performance: ModelPerformance,
    pub parameters: ModelParameters,
}

impl From<&ModelMetadata> for ModelInfoResponse {
    fn from(metadata: &ModelMetadata) -> Self {
        Self {
            model_type: metadata.model_type.clone(),
            training_date: metadata.training_date.clone(),
            performance: ModelPerformance {
                accuracy: metadata.accuracy,
                precision: metadata.precision,
                recall: metadata.recall,
                f1_score: metadata.f1_score,
                auc_roc: metadata.auc_roc,
            },
            parameters: ModelParameters {
                n_estimators: metadata.n_estimators,
                max_depth: metadata.max_depth,
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_metadata() -> ModelMetadata {
    ModelMetadata {
        model_type: "RandomForestClassifier".to_string(),
        n_estimators: 200,
        max_depth: 20,
        training_date: "2026-08-01T09:30:00".to_string(),
        accuracy: 0.923,
        precision: 0.88,
        recall: 0.85,
        f1_score: 0.865,
        auc_roc: 0.97,
        feature_names: crate::engine::FEATURE_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_producer_format() {
        let metadata: ModelMetadata = serde_json::from_value(serde_json::json!({
            "model_type": "RandomForestClassifier",
            "n_estimators": 200,
            "max_depth": 20,
            "training_date": "2026-08-01T09:30:00.123456",
            "accuracy": 0.923,
            "precision": 0.881,
            "recall": 0.854,
            "f1_score": 0.867,
            "auc_roc": 0.97,
            "feature_names": [
                "amount", "transaction_count_1h", "transaction_count_24h",
                "different_merchants_24h", "avg_transaction_amount",
                "time_since_last_transaction", "is_weekend", "is_night_time",
                "merchant_risk_score", "card_age_days", "transaction_velocity",
                "amount_deviation", "cross_border", "device_change", "ip_change"
            ]
        }))
        .unwrap();

        assert_eq!(metadata.model_type, "RandomForestClassifier");
        assert_eq!(metadata.n_estimators, 200);
        assert_eq!(metadata.feature_names.len(), 15);
    }

    #[test]
    fn model_info_response_groups_metrics_and_parameters() {
        let info = ModelInfoResponse::from(&sample_metadata());
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["model_type"], "RandomForestClassifier");
        assert_eq!(json["performance"]["accuracy"], 0.923);
        assert_eq!(json["parameters"]["n_estimators"], 200);
        assert_eq!(json["parameters"]["max_depth"], 20);
    }
}
