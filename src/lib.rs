//! FraudGate - Real-time transaction fraud scoring service
//!
//! Serves a trained fraud classifier over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        FRAUDGATE                           │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  API      │  │  Scoring     │  │  Model Artifacts    │  │
//! │  │  Layer    │─▶│  Engine      │─▶│  (ONNX + metadata,  │  │
//! │  │  (Axum)   │  │  (ONNX Rt)   │  │   loaded at boot)   │  │
//! │  └───────────┘  └──────────────┘  └─────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<engine::ModelState>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::check))
        .route("/api/model-info", get(handlers::model_info::get))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/batch-predict", post(handlers::predict::batch_predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
