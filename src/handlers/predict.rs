//! Prediction handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::engine::scoring;
use crate::models::{
    BatchPredictRequest, BatchPredictionResponse, PredictionResponse, TransactionRecord,
};
use crate::{AppResult, AppState};

/// Score one transaction
pub async fn predict(
    State(state): State<AppState>,
    Json(tx): Json<TransactionRecord>,
) -> AppResult<Json<PredictionResponse>> {
    tx.validate()?;

    let classifier = state.model.classifier()?;
    let prediction = scoring::score_transaction(classifier, &tx)?;

    tracing::info!(
        is_fraud = prediction.is_fraud,
        probability = prediction.fraud_probability,
        "Prediction complete"
    );

    Ok(Json(PredictionResponse::new(prediction)))
}

/// Score an ordered batch of up to 1000 transactions
pub async fn batch_predict(
    State(state): State<AppState>,
    Json(req): Json<BatchPredictRequest>,
) -> AppResult<Json<BatchPredictionResponse>> {
    req.validate()?;

    let classifier = state.model.classifier()?;
    let batch = scoring::score_batch(classifier, &req.transactions)?;

    tracing::info!(processed = batch.total_count, "Batch prediction complete");

    Ok(Json(BatchPredictionResponse::new(batch)))
}
