use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::core::estimator::estimate;
use crate::error::SessionError;
use crate::models::{CustomerProfile, PredictionResult, ProfileDraft};

/// Artificial pause between submitting a profile and seeing its result
///
/// Purely cosmetic; it never changes the computed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    duration: Duration,
}

impl ThinkingDelay {
    pub const DEFAULT_MS: u64 = 1500;

    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// No pause at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub async fn wait(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_MS)
    }
}

/// A validated profile waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    profile: CustomerProfile,
    generation: u64,
}

pub type SharedSession = Arc<Mutex<PredictionSession>>;

/// Interactive wrapper around the estimator
///
/// Collects the four profile fields, allows one submission at a time and keeps
/// the last result until the next successful prediction or a reset.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    draft: ProfileDraft,
    result: Option<PredictionResult>,
    pending: bool,
    // Bumped on reset so that submissions started earlier are discarded
    generation: u64,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Merge the supplied fields into the current draft
    pub fn update(&mut self, patch: ProfileDraft) {
        self.draft.merge(patch);
    }

    /// Validate the draft and mark a submission as in flight
    ///
    /// On error nothing changes: the previous result stays visible.
    pub fn begin_submit(&mut self) -> Result<Submission, SessionError> {
        if self.pending {
            return Err(SessionError::InFlight);
        }

        let profile = self.draft.to_profile()?;
        self.pending = true;

        Ok(Submission {
            profile,
            generation: self.generation,
        })
    }

    /// Score a submission and publish its result
    pub fn complete(&mut self, submission: Submission) -> Result<PredictionResult, SessionError> {
        if submission.generation != self.generation {
            return Err(SessionError::Discarded);
        }

        let result = estimate(&submission.profile);
        self.pending = false;
        self.result = Some(result);

        Ok(result)
    }

    /// Clear all fields and any result
    pub fn reset(&mut self) {
        self.draft = ProfileDraft::default();
        self.result = None;
        self.pending = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Submit while holding the session exclusively for the whole delay
    ///
    /// Dropping the returned future mid-delay clears the pending flag.
    pub async fn submit(&mut self, delay: &ThinkingDelay) -> Result<PredictionResult, SessionError> {
        let submission = self.begin_submit()?;
        let guard = PendingGuard { session: self };
        delay.wait().await;
        guard.finish(submission)
    }
}

/// Clears the pending flag if a submission is abandoned before completing
struct PendingGuard<'a> {
    session: &'a mut PredictionSession,
}

impl PendingGuard<'_> {
    fn finish(mut self, submission: Submission) -> Result<PredictionResult, SessionError> {
        // complete() clears the flag itself; the Drop below is then a no-op
        self.session.complete(submission)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.session.pending = false;
    }
}

/// Submit a shared session without holding its lock across the delay
///
/// The delay and scoring run on their own task, so a caller that goes away
/// mid-delay still lets the submission finish and release the session.
/// Other callers can observe the pending state or reset the session meanwhile.
pub async fn submit_shared(
    session: SharedSession,
    delay: ThinkingDelay,
) -> Result<PredictionResult, SessionError> {
    let submission = session.lock().await.begin_submit()?;

    tracing::debug!("Prediction submitted, waiting {:?}", delay.duration());
    let task = tokio::spawn(async move {
        delay.wait().await;
        session.lock().await.complete(submission)
    });

    match task.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => {
            tracing::warn!("Prediction task cancelled: {}", e);
            Err(SessionError::Discarded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;
    use crate::models::ProfileField;

    fn filled_draft() -> ProfileDraft {
        ProfileDraft {
            age: Some(35),
            gender: Some("Female".to_string()),
            education: Some("Graduate".to_string()),
            review_score: Some(5),
        }
    }

    #[test]
    fn test_begin_submit_twice_is_in_flight() {
        let mut session = PredictionSession::new();
        session.update(filled_draft());

        let _first = session.begin_submit().unwrap();
        assert!(session.is_pending());
        assert_eq!(session.begin_submit(), Err(SessionError::InFlight));
    }

    #[test]
    fn test_missing_field_does_not_become_pending() {
        let mut session = PredictionSession::new();
        session.update(ProfileDraft {
            age: Some(35),
            ..Default::default()
        });

        let err = session.begin_submit().unwrap_err();
        assert_eq!(
            err,
            SessionError::Estimate(EstimateError::MissingField {
                fields: vec![ProfileField::Gender, ProfileField::Education, ProfileField::ReviewScore],
            })
        );
        assert!(!session.is_pending());
    }

    #[test]
    fn test_reset_discards_pending_submission() {
        let mut session = PredictionSession::new();
        session.update(filled_draft());

        let submission = session.begin_submit().unwrap();
        session.reset();

        assert_eq!(session.complete(submission), Err(SessionError::Discarded));
        assert!(session.result().is_none());
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let mut session = PredictionSession::new();
        session.update(filled_draft());

        let started = tokio::time::Instant::now();
        let result = session.submit(&ThinkingDelay::default()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(ThinkingDelay::DEFAULT_MS));
        assert!(result.will_purchase);
        assert_eq!(session.result(), Some(&result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submit_releases_session() {
        let mut session = PredictionSession::new();
        session.update(filled_draft());

        let timed_out = tokio::time::timeout(
            Duration::from_millis(10),
            session.submit(&ThinkingDelay::default()),
        )
        .await;
        assert!(timed_out.is_err());
        assert!(!session.is_pending());
        assert!(session.result().is_none());

        assert!(session.submit(&ThinkingDelay::none()).await.is_ok());
    }
}
