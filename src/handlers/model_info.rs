//! Model info handler

use axum::{extract::State, Json};

use crate::models::ModelInfoResponse;
use crate::{AppResult, AppState};

/// Return the trained model's metadata, or 503 while no model is loaded.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let metadata = state.model.describe()?;
    Ok(Json(ModelInfoResponse::from(metadata)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ModelState;
    use crate::models::metadata::sample_metadata;
    use crate::AppError;
    use std::sync::Arc;

    fn test_state(model: ModelState) -> AppState {
        AppState {
            model: Arc::new(model),
            config: crate::config::Config {
                port: 8000,
                model_path: "unused.onnx".to_string(),
                metadata_path: "unused.json".to_string(),
                onnx_threads: 1,
                environment: "test".to_string(),
            },
        }
    }

    #[test]
    fn unready_model_info_is_service_unavailable() {
        let result = tokio_test::block_on(get(State(test_state(ModelState::unloaded()))));
        assert!(matches!(result, Err(AppError::ModelUnavailable)));
    }

    #[test]
    fn metadata_without_classifier_is_still_unavailable() {
        let state = test_state(ModelState::with_metadata_only(sample_metadata()));
        let result = tokio_test::block_on(get(State(state)));
        assert!(matches!(result, Err(AppError::ModelUnavailable)));
    }
}
