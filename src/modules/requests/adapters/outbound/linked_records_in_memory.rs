use crate::modules::requests::adapters::outbound::conflict_check::{
    ConflictCheckError, ScheduleConflictChecker,
};
use crate::modules::requests::adapters::outbound::linked_records::{
    LinkOutcome, LinkStatus, LinkedRecords, LinkedRecordsError, ParticipationStatus,
};
use crate::modules::requests::core::kind::RequestSubject;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    pub starts_at: i64,
    pub ends_at: i64,
}

impl EventSchedule {
    /// Half-open ranges: an event ending when another starts does not overlap it.
    pub fn overlaps(&self, other: &EventSchedule) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }
}

type Pair = (String, String);

/// Linked records and event schedules kept in memory. Also answers the
/// schedule conflict predicate from the confirmed participations it holds.
#[derive(Default)]
pub struct InMemoryLinkedRecords {
    schedules: RwLock<HashMap<String, EventSchedule>>,
    participations: RwLock<HashMap<Pair, ParticipationStatus>>,
    memberships: RwLock<HashMap<Pair, LinkStatus>>,
    representations: RwLock<HashMap<Pair, LinkStatus>>,
    is_offline: AtomicBool,
}

impl InMemoryLinkedRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn schedule_event(&self, event_id: impl Into<String>, starts_at: i64, ends_at: i64) {
        self.schedules
            .write()
            .await
            .insert(event_id.into(), EventSchedule { starts_at, ends_at });
    }

    pub async fn set_participation(
        &self,
        event_id: impl Into<String>,
        profile_id: impl Into<String>,
        status: ParticipationStatus,
    ) {
        self.participations
            .write()
            .await
            .insert((event_id.into(), profile_id.into()), status);
    }

    pub async fn participation(&self, event_id: &str, profile_id: &str) -> Option<ParticipationStatus> {
        self.participations
            .read()
            .await
            .get(&(event_id.to_string(), profile_id.to_string()))
            .copied()
    }

    pub async fn membership(&self, band_id: &str, member_id: &str) -> Option<LinkStatus> {
        self.memberships
            .read()
            .await
            .get(&(band_id.to_string(), member_id.to_string()))
            .copied()
    }

    pub async fn representation(&self, artist_id: &str, representative_id: &str) -> Option<LinkStatus> {
        self.representations
            .read()
            .await
            .get(&(artist_id.to_string(), representative_id.to_string()))
            .copied()
    }

    fn check_online(&self) -> Result<(), LinkedRecordsError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(LinkedRecordsError::Backend("Linked records offline".into()));
        }
        Ok(())
    }

    async fn activate(
        map: &RwLock<HashMap<Pair, LinkStatus>>,
        key: Pair,
    ) -> LinkOutcome {
        let mut guard = map.write().await;
        match guard.get_mut(&key) {
            Some(status) if *status == LinkStatus::Pending => {
                *status = LinkStatus::Active;
                LinkOutcome::Applied
            }
            Some(_) => LinkOutcome::Unchanged,
            None => LinkOutcome::Missing,
        }
    }
}

#[async_trait::async_trait]
impl LinkedRecords for InMemoryLinkedRecords {
    async fn open(&self, subject: &RequestSubject) -> Result<(), LinkedRecordsError> {
        self.check_online()?;
        match subject {
            RequestSubject::EventInvite {
                event_id,
                participant_id,
            } => {
                self.participations
                    .write()
                    .await
                    .entry((event_id.clone(), participant_id.clone()))
                    .or_insert(ParticipationStatus::Pending);
            }
            RequestSubject::BandJoin { band_id, member_id } => {
                self.memberships
                    .write()
                    .await
                    .entry((band_id.clone(), member_id.clone()))
                    .or_insert(LinkStatus::Pending);
            }
            RequestSubject::Representation {
                artist_id,
                representative_id,
            } => {
                self.representations
                    .write()
                    .await
                    .entry((artist_id.clone(), representative_id.clone()))
                    .or_insert(LinkStatus::Pending);
            }
        }
        Ok(())
    }

    async fn confirm_participation(
        &self,
        event_id: &str,
        profile_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError> {
        self.check_online()?;
        let mut guard = self.participations.write().await;
        let outcome = match guard.get_mut(&(event_id.to_string(), profile_id.to_string())) {
            Some(status) if *status == ParticipationStatus::Pending => {
                *status = ParticipationStatus::Confirmed;
                LinkOutcome::Applied
            }
            Some(_) => LinkOutcome::Unchanged,
            None => LinkOutcome::Missing,
        };
        Ok(outcome)
    }

    async fn activate_membership(
        &self,
        band_id: &str,
        member_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError> {
        self.check_online()?;
        Ok(Self::activate(&self.memberships, (band_id.to_string(), member_id.to_string())).await)
    }

    async fn activate_representation(
        &self,
        artist_id: &str,
        representative_id: &str,
    ) -> Result<LinkOutcome, LinkedRecordsError> {
        self.check_online()?;
        Ok(Self::activate(
            &self.representations,
            (artist_id.to_string(), representative_id.to_string()),
        )
        .await)
    }
}

#[async_trait::async_trait]
impl ScheduleConflictChecker for InMemoryLinkedRecords {
    async fn has_conflict(
        &self,
        profile_id: &str,
        event_id: &str,
    ) -> Result<bool, ConflictCheckError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(ConflictCheckError::Backend("Linked records offline".into()));
        }
        let schedules = self.schedules.read().await;
        // An event without a known schedule cannot overlap anything.
        let Some(candidate) = schedules.get(event_id) else {
            return Ok(false);
        };
        let participations = self.participations.read().await;
        let conflict = participations.iter().any(|((other_event, profile), status)| {
            profile == profile_id
                && other_event != event_id
                && *status == ParticipationStatus::Confirmed
                && schedules
                    .get(other_event)
                    .is_some_and(|other| other.overlaps(candidate))
        });
        Ok(conflict)
    }
}
