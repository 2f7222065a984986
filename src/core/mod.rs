// Core algorithm exports
pub mod estimator;
pub mod scoring;
pub mod session;

pub use estimator::{estimate, estimate_draft};
pub use scoring::score_profile;
pub use session::{PredictionSession, SharedSession, Submission, ThinkingDelay, submit_shared};
