use thiserror::Error;

use crate::models::ProfileField;

/// Errors raised before a profile can be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Missing information: {}", join_fields(.fields))]
    MissingField { fields: Vec<ProfileField> },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: ProfileField,
        value: String,
        reason: String,
    },
}

/// Errors raised by an interactive prediction session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("A prediction is already in progress")]
    InFlight,

    #[error("Prediction was discarded by a reset")]
    Discarded,
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = EstimateError::MissingField {
            fields: vec![ProfileField::Age, ProfileField::ReviewScore],
        };
        assert_eq!(err.to_string(), "Missing information: age, reviewScore");
    }
}
