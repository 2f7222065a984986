// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CustomerProfile, Gender, Education, ProfileField, ProfileDraft, ScoreBreakdown, Likelihood, PredictionResult};
pub use requests::{PredictRequest, UpdateProfileRequest};
pub use responses::{PredictionResponse, ModelInfoResponse, FeatureWeights, SessionResponse, HealthResponse, ErrorResponse};
