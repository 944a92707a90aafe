use crate::modules::requests::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::requests::core::decision::Decision;
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::evolve::fold;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::modules::requests::use_cases::expire_request::command::ExpireRequest;
use crate::modules::requests::use_cases::expire_request::decide::decide_expire;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct ExpireRequestHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> ExpireRequestHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: ExpireRequest,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = fold(stream.events);

        match decide_expire(&state, command) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                info!(stream_id, "request expired");
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
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
