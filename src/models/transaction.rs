//! Transaction request models

use serde::Deserialize;
use validator::Validate;

/// One transaction submitted for scoring.
///
/// Counts and 0/1 flags are unsigned so negative values are rejected at
/// parse time; the remaining ranges are enforced by `validate()` before the
/// record reaches the scoring engine. Field order here mirrors the order
/// the classifier was trained on (see `engine::features`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransactionRecord {
    /// Transaction amount
    #[validate(range(min = 0.0))]
    pub amount: f64,

    /// Transactions on the card in the last hour
    pub transaction_count_1h: u32,

    /// Transactions on the card in the last 24 hours
    pub transaction_count_24h: u32,

    /// Distinct merchants in the last 24 hours
    pub different_merchants_24h: u32,

    /// Cardholder's average transaction amount
    #[validate(range(min = 0.0))]
    pub avg_transaction_amount: f64,

    /// Seconds since the previous transaction
    #[validate(range(min = 0.0))]
    pub time_since_last_transaction: f64,

    /// Weekend flag (0/1)
    #[validate(range(max = 1))]
    pub is_weekend: u8,

    /// Night-time flag (0/1)
    #[validate(range(max = 1))]
    pub is_night_time: u8,

    /// Merchant risk score in [0, 1]
    #[validate(range(min = 0.0, max = 1.0))]
    pub merchant_risk_score: f64,

    /// Card age in days
    #[validate(range(min = 0.0))]
    pub card_age_days: f64,

    /// Transaction velocity indicator
    #[validate(range(min = 0.0))]
    pub transaction_velocity: f64,

    /// Deviation from the cardholder's usual amount
    #[validate(range(min = 0.0))]
    pub amount_deviation: f64,

    /// Cross-border flag (0/1)
    #[validate(range(max = 1))]
    pub cross_border: u8,

    /// Device-change flag (0/1)
    #[validate(range(max = 1))]
    pub device_change: u8,

    /// IP-change flag (0/1)
    #[validate(range(max = 1))]
    pub ip_change: u8,
}

/// Batch scoring request
#[derive(Debug, Deserialize, Validate)]
pub struct BatchPredictRequest {
    #[validate(nested)]
    pub transactions: Vec<TransactionRecord>,
}

#[cfg(test)]
pub(crate) fn sample_record() -> TransactionRecord {
    TransactionRecord {
        amount: 75_000.0,
        transaction_count_1h: 2,
        transaction_count_24h: 5,
        different_merchants_24h: 3,
        avg_transaction_amount: 50_000.0,
        time_since_last_transaction: 3600.0,
        is_weekend: 0,
        is_night_time: 0,
        merchant_risk_score: 0.25,
        card_age_days: 365.0,
        transaction_velocity: 1.5,
        amount_deviation: 0.8,
        cross_border: 0,
        device_change: 0,
        ip_change: 0,
    }
}
