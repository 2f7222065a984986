use crate::core::scoring::{score_profile, PURCHASE_THRESHOLD};
use crate::error::EstimateError;
use crate::models::{CustomerProfile, PredictionResult, ProfileDraft};

/// Label a profile as likely or unlikely to purchase
///
/// Pure and deterministic: the same profile always yields the same result.
pub fn estimate(profile: &CustomerProfile) -> PredictionResult {
    let breakdown = score_profile(profile);

    PredictionResult {
        will_purchase: breakdown.total() > PURCHASE_THRESHOLD,
        breakdown,
    }
}

/// Validate a draft, then estimate it
///
/// Nothing is scored unless all four fields are present and valid.
pub fn estimate_draft(draft: &ProfileDraft) -> Result<PredictionResult, EstimateError> {
    let profile = draft.to_profile()?;
    Ok(estimate(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, Gender, ProfileField};

    fn profile(age: u32, gender: Gender, education: Education, review_score: u8) -> CustomerProfile {
        CustomerProfile { age, gender, education, review_score }
    }

    #[test]
    fn test_exact_threshold_is_not_a_purchase() {
        let result = estimate(&profile(25, Gender::Female, Education::HighSchool, 1));
        assert_eq!(result.breakdown.total(), 50);
        assert!(!result.will_purchase);
    }

    #[test]
    fn test_estimate_draft_rejects_missing() {
        let draft = ProfileDraft {
            age: Some(40),
            gender: Some("Male".to_string()),
            education: Some("Graduate".to_string()),
            review_score: None,
        };

        assert_eq!(
            estimate_draft(&draft),
            Err(EstimateError::MissingField { fields: vec![ProfileField::ReviewScore] })
        );
    }
}
