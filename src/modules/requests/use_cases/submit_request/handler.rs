use crate::modules::requests::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::requests::adapters::outbound::linked_records::LinkedRecords;
use crate::modules::requests::core::decision::Decision;
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::evolve::fold;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::modules::requests::use_cases::submit_request::decide::decide_submit;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct SubmitRequestHandler<TEventStore, TOutbox, TLinks>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TLinks: LinkedRecords + 'static,
{
    topic: String,
    default_ttl_ms: i64,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    links: Arc<TLinks>,
}

impl<TEventStore, TOutbox, TLinks> SubmitRequestHandler<TEventStore, TOutbox, TLinks>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TLinks: LinkedRecords + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        default_ttl_ms: i64,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        links: Arc<TLinks>,
    ) -> Self {
        Self {
            topic: topic.into(),
            default_ttl_ms,
            event_store,
            outbox,
            links,
        }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: SubmitRequest,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = fold(stream.events);

        let (events, intents) = match decide_submit(&state, command, self.default_ttl_ms) {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        // Opening is idempotent, so a record left behind by a lost append is harmless.
        for event in &events {
            if let RequestEvent::RequestSubmittedV1(submitted) = event {
                self.links.open(&submitted.subject).await?;
            }
        }

        self.event_store
            .append(stream_id, stream.version, &events)
            .await?;
        info!(stream_id, "request submitted");

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
}
