// Port for the records a request links: event participation, band membership
// and representation. Every status update is conditional on the record still
// being pending, the same predicate the hosted store applies.

use crate::modules::requests::core::kind::RequestSubject;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipationStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "rechazada")]
    Rejected,
}

/// Status of a membership or representation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "activa")]
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The record was pending and has been updated.
    Applied,
    /// The record exists but is no longer pending; nothing changed.
    Unchanged,
    /// No record exists for the pair.
    Missing,
}

#[derive(Debug, Error)]
pub enum LinkedRecordsError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LinkedRecords: Send + Sync {
    /// Create the pending record for a new request. Existing records are left as they are.
    async fn open(&self, subject: &RequestSubject) -> Result<(), LinkedRecordsError>;

    async fn confirm_participation(
        &self,
        event_id: &str,
        profile_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError>;

    async fn activate_membership(
        &self,
        band_id: &str,
        member_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError>;

    async fn activate_representation(
        &self,
        artist_id: &str,
        representative_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError>;
}

/// Apply the acceptance side effect matching the request kind.
pub async fn apply_acceptance(
    links: &impl LinkedRecords,
    subject: &RequestSubject,
) -> Result<LinkOutcome, LinkedRecordsError> {
    match subject {
        RequestSubject::EventInvite {
            event_id,
            participant_id,
        } => links.confirm_participation(event_id, participant_id).await,
        RequestSubject::BandJoin { band_id, member_id } => {
            links.activate_membership(band_id, member_id).await
        }
        RequestSubject::Representation {
            artist_id,
            representative_id,
        } => {
            links
                .activate_representation(artist_id, representative_id)
                .await
        }
    }
}
