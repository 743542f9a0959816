//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the serialized classifier (ONNX)
    pub model_path: String,

    /// Path to the model metadata JSON
    pub metadata_path: String,

    /// Intra-op thread count for ONNX inference
    pub onnx_threads: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "fraud_detection_model.onnx".to_string()),

            metadata_path: env::var("MODEL_METADATA_PATH")
                .unwrap_or_else(|_| "model_metadata.json".to_string()),

            onnx_threads: env::var("ONNX_THREADS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }
}
