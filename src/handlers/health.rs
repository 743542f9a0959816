//! Health check and service index handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    model_version: Option<String>,
    timestamp: DateTime<Utc>,
}

/// Service index
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "FraudGate real-time transaction fraud scoring API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "predict": "/api/predict (POST)",
            "batch_predict": "/api/batch-predict (POST)",
            "model_info": "/api/model-info"
        }
    }))
}

/// Health check
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ready = state.model.is_ready();

    Json(HealthResponse {
        status: if ready { "healthy" } else { "unhealthy" },
        model_loaded: ready,
        model_version: state.model.version().map(str::to_string),
        timestamp: Utc::now(),
    })
}
