//! Single and batch scoring orchestration

use tracing::debug;

use super::classifier::Classifier;
use super::features::FeatureExtractor;
use crate::models::{BatchScores, Prediction, RiskLevel, TransactionRecord};
use crate::{AppError, AppResult};

/// Hard cap on transactions per batch call.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Score one transaction through the full pipeline:
/// feature assembly, classifier invocation, risk bucketing.
pub fn score_transaction<C: Classifier>(
    classifier: &C,
    tx: &TransactionRecord,
) -> AppResult<Prediction> {
    let extractor = FeatureExtractor::new();
    score_one(classifier, &extractor, tx)
}

/// Score an ordered batch sequentially.
///
/// Fails fast on oversized batches before any inference runs. One failing
/// record fails the whole call; there is no partial-batch success.
pub fn score_batch<C: Classifier>(
    classifier: &C,
    transactions: &[TransactionRecord],
) -> AppResult<BatchScores> {
    if transactions.len() > MAX_BATCH_SIZE {
        return Err(AppError::BatchTooLarge {
            size: transactions.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    let extractor = FeatureExtractor::new();
    let mut results = Vec::with_capacity(transactions.len());

    for tx in transactions {
        results.push(score_one(classifier, &extractor, tx)?);
    }

    let fraud_count = results.iter().filter(|p| p.is_fraud).count();

    debug!(
        total = results.len(),
        fraud = fraud_count,
        "Batch scoring complete"
    );

    Ok(BatchScores {
        total_count: results.len(),
        fraud_count,
        results,
    })
}

fn score_one<C: Classifier>(
    classifier: &C,
    extractor: &FeatureExtractor,
    tx: &TransactionRecord,
) -> AppResult<Prediction> {
    let features = extractor.extract(tx);
    let score = classifier.score(&features)?;

    Ok(Prediction {
        is_fraud: score.is_fraud,
        fraud_probability: score.probability,
        risk_level: RiskLevel::from_probability(score.probability),
    })
}
