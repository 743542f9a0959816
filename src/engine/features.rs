//! Feature extraction for fraud-classifier inference.
//!
//! Transforms a validated transaction into the numeric vector the classifier
//! expects. The attribute order is the contract with the training pipeline:
//! it must match the `feature_names` list in the model metadata, which is
//! verified once at startup.

use crate::models::TransactionRecord;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 15;

/// Serving-side feature order. Must match training column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "amount",
    "transaction_count_1h",
    "transaction_count_24h",
    "different_merchants_24h",
    "avg_transaction_amount",
    "time_since_last_transaction",
    "is_weekend",
    "is_night_time",
    "merchant_risk_score",
    "card_age_days",
    "transaction_velocity",
    "amount_deviation",
    "cross_border",
    "device_change",
    "ip_change",
];

/// Feature extractor that projects transactions into model input vectors.
///
/// Pure and total over well-formed records: range validation happens at the
/// transport boundary, ordering happens here.
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the feature vector in training order.
    pub fn extract(&self, tx: &TransactionRecord) -> [f32; FEATURE_COUNT] {
        [
            tx.amount as f32,
            tx.transaction_count_1h as f32,
            tx.transaction_count_24h as f32,
            tx.different_merchants_24h as f32,
            tx.avg_transaction_amount as f32,
            tx.time_since_last_transaction as f32,
            tx.is_weekend as f32,
            tx.is_night_time as f32,
            tx.merchant_risk_score as f32,
            tx.card_age_days as f32,
            tx.transaction_velocity as f32,
            tx.amount_deviation as f32,
            tx.cross_border as f32,
            tx.device_change as f32,
            tx.ip_change as f32,
        ]
    }

    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn feature_names(&self) -> [&'static str; FEATURE_COUNT] {
        FEATURE_NAMES
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::sample_record;

    #[test]
    fn vector_has_one_slot_per_feature_name() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract(&sample_record());

        assert_eq!(features.len(), extractor.feature_count());
        assert_eq!(extractor.feature_names().len(), FEATURE_COUNT);
    }

    #[test]
    fn vector_follows_training_order() {
        let tx = sample_record();
        let features = FeatureExtractor::new().extract(&tx);

        assert_eq!(features[0], 75_000.0); // amount
        assert_eq!(features[1], 2.0); // transaction_count_1h
        assert_eq!(features[5], 3600.0); // time_since_last_transaction
        assert_eq!(features[8], 0.25); // merchant_risk_score
        assert_eq!(features[14], 0.0); // ip_change
    }

    #[test]
    fn flags_project_to_zero_or_one() {
        let mut tx = sample_record();
        tx.cross_border = 1;
        tx.device_change = 1;
        let features = FeatureExtractor::new().extract(&tx);

        assert_eq!(features[12], 1.0);
        assert_eq!(features[13], 1.0);
        assert_eq!(features[6], 0.0); // is_weekend untouched
    }
}
