use crate::modules::requests::adapters::outbound::conflict_check::ScheduleConflictChecker;
use crate::modules::requests::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::requests::adapters::outbound::linked_records::{
    LinkOutcome, LinkedRecords, apply_acceptance,
};
use crate::modules::requests::core::decision::{DecideError, Decision};
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::evolve::{evolve, fold};
use crate::modules::requests::core::kind::RequestSubject;
use crate::modules::requests::core::state::RequestState;
use crate::modules::requests::use_cases::accept_request::command::AcceptRequest;
use crate::modules::requests::use_cases::accept_request::decide::{
    decide_accept, decide_revert_acceptance,
};
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct AcceptRequestHandler<TEventStore, TOutbox, TLinks, TConflicts>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TLinks: LinkedRecords + 'static,
    TConflicts: ScheduleConflictChecker + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    links: Arc<TLinks>,
    conflicts: Arc<TConflicts>,
}

impl<TEventStore, TOutbox, TLinks, TConflicts>
    AcceptRequestHandler<TEventStore, TOutbox, TLinks, TConflicts>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TLinks: LinkedRecords + 'static,
    TConflicts: ScheduleConflictChecker + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        links: Arc<TLinks>,
        conflicts: Arc<TConflicts>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            links,
            conflicts,
        }
    }

    /// Accept the request, then apply the linked record update its kind calls for.
    ///
    /// The status change is committed first. When the linked record cannot be
    /// updated the acceptance is reverted with a compensating event and
    /// [`ApplicationError::AcceptanceReverted`] is returned.
    pub async fn handle(
        &self,
        stream_id: &str,
        command: AcceptRequest,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = fold(stream.events);

        let (events, intents) = match decide_accept(&state, command) {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };
        let subject = match state.details() {
            Some(details) => details.subject.clone(),
            None => return Err(ApplicationError::Domain(DecideError::NotFound)),
        };

        if let RequestSubject::EventInvite {
            event_id,
            participant_id,
        } = &subject
        {
            if self.conflicts.has_conflict(participant_id, event_id).await? {
                return Err(ApplicationError::Domain(DecideError::ScheduleConflict));
            }
        }

        self.event_store
            .append(stream_id, stream.version, &events)
            .await?;
        let version = stream.version + events.len() as i64;
        let accepted = events.into_iter().fold(state, evolve);

        match apply_acceptance(&*self.links, &subject).await {
            Ok(LinkOutcome::Applied) => info!(stream_id, "request accepted"),
            Ok(LinkOutcome::Unchanged) => {
                warn!(stream_id, ?subject, "linked record no longer pending, left unchanged")
            }
            Ok(LinkOutcome::Missing) => {
                return Err(self
                    .revert(stream_id, version, &accepted, "linked record missing".into())
                    .await);
            }
            Err(e) => {
                return Err(self.revert(stream_id, version, &accepted, e.to_string()).await);
            }
        }

        dispatch_intents(
            &*self.outbox,
            stream_id,
            stream.version,
            &self.topic,
            intents,
        )
        .await?;
        Ok(())
    }

    async fn revert(
        &self,
        stream_id: &str,
        version: i64,
        accepted: &RequestState,
        cause: String,
    ) -> ApplicationError {
        warn!(stream_id, cause = %cause, "reverting acceptance");
        let events = match decide_revert_acceptance(accepted, now_millis(), cause.clone()) {
            Decision::Accepted { events, .. } => events,
            Decision::Rejected { reason } => return ApplicationError::Domain(reason),
        };
        match self.event_store.append(stream_id, version, &events).await {
            Ok(()) => ApplicationError::AcceptanceReverted(cause),
            Err(e) => {
                error!(stream_id, error = %e, "failed to revert acceptance");
                ApplicationError::EventStore(e)
            }
        }
    }
}
