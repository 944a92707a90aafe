use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConflictCheckError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Predicate consulted before an event invitation is accepted.
#[async_trait]
pub trait ScheduleConflictChecker: Send + Sync {
    /// True when `profile_id` is already confirmed for another event whose
    /// time range overlaps the one of `event_id`.
    async fn has_conflict(&self, profile_id: &str, event_id: &str)
    -> Result<bool, ConflictCheckError>;
}
