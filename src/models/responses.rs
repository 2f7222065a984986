use serde::{Deserialize, Serialize};
use crate::models::domain::{Likelihood, PredictionResult, ProfileDraft, ScoreBreakdown};

/// Response for prediction endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "willPurchase")]
    pub will_purchase: bool,
    pub likelihood: Likelihood,
    pub message: String,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
}

impl From<PredictionResult> for PredictionResponse {
    fn from(result: PredictionResult) -> Self {
        let likelihood = result.likelihood();
        Self {
            will_purchase: result.will_purchase,
            likelihood,
            message: likelihood.describe().to_string(),
            total_score: result.total_score(),
            breakdown: result.breakdown,
        }
    }
}

/// Static description of the scoring table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub name: String,
    pub kind: String,
    pub threshold: f64,
    pub features: Vec<FeatureWeights>,
}

/// Buckets for a single feature, as `(condition, weight)` pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub feature: String,
    pub buckets: Vec<(String, f64)>,
}

/// Snapshot of an interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub profile: ProfileDraft,
    pub result: Option<PredictionResponse>,
    pub pending: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
