//! Purchase Predictor - mock purchase-likelihood estimator
//!
//! This library provides a fixed-weight scoring rule that labels a customer
//! profile as likely or unlikely to purchase, plus an interactive session
//! wrapper that simulates model latency before revealing the result.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{estimate, estimate_draft, PredictionSession, ThinkingDelay};
pub use error::{EstimateError, SessionError};
pub use models::{CustomerProfile, Gender, Education, ProfileDraft, PredictionResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = estimate(&CustomerProfile {
            age: 25,
            gender: Gender::Male,
            education: Education::HighSchool,
            review_score: 2,
        });
        assert!(!result.will_purchase);
    }
}
