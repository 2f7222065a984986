use crate::models::domain::ProfileDraft;

/// Request body for a stateless prediction
///
/// ```json
/// {
///   "age": 35,
///   "gender": "Female",
///   "education": "Graduate",
///   "reviewScore": 5
/// }
/// ```
pub type PredictRequest = ProfileDraft;

/// Request body for updating a session's profile; absent fields are kept
pub type UpdateProfileRequest = ProfileDraft;
