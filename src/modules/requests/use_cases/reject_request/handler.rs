use crate::modules::requests::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::requests::core::decision::Decision;
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::evolve::fold;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
use crate::modules::requests::use_cases::reject_request::decide::decide_reject;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

/// Rejection only changes the request; linked records stay pending.
pub struct RejectRequestHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<RequestEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> RejectRequestHandler<TEventStore, TOutbox>
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
        command: RejectRequest,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = fold(stream.events);

        match decide_reject(&state, command) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                info!(stream_id, "request rejected");
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

#[cfg(test)]
mod request_reject_handler_tests {
    use crate::modules::requests::adapters::outbound::linked_records::ParticipationStatus;
    use crate::modules::requests::adapters::outbound::linked_records_in_memory::InMemoryLinkedRecords;
    use crate::modules::requests::core::decision::DecideError;
    use crate::modules::requests::core::events::RequestEvent;
    use crate::modules::requests::core::evolve::fold;
    use crate::modules::requests::core::kind::RequestStatus;
    use crate::modules::requests::use_cases::application_error::ApplicationError;
    use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
    use crate::modules::requests::use_cases::reject_request::handler::RejectRequestHandler;
    use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
    use crate::modules::requests::use_cases::submit_request::handler::SubmitRequestHandler;
    use crate::shared::core::primitives::{MILLIS_PER_DAY, request_stream_id};
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::event_store::EventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::commands::submit_request::SubmitRequestBuilder;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    const TOPIC: &str = "profile-requests";

    type BeforeEachReturn = (
        String,
        SubmitRequest,
        Arc<InMemoryEventStore<RequestEvent>>,
        Arc<InMemoryDomainOutbox>,
        Arc<InMemoryLinkedRecords>,
    );

    #[fixture]
    async fn before_each() -> BeforeEachReturn {
        let event_store = Arc::new(InMemoryEventStore::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let links = Arc::new(InMemoryLinkedRecords::new());
        let command = SubmitRequestBuilder::new().build();
        let stream_id = request_stream_id(&command.request_id);
        SubmitRequestHandler::new(
            TOPIC,
            14 * MILLIS_PER_DAY,
            event_store.clone(),
            outbox.clone(),
            links.clone(),
        )
        .handle(&stream_id, command.clone())
        .await
        .expect("submit failed");
        (stream_id, command, event_store, outbox, links)
    }

    fn reject(command: &SubmitRequest, reason: Option<&str>) -> RejectRequest {
        RejectRequest {
            request_id: command.request_id.clone(),
            rejected_by: command.target_id.clone(),
            rejected_at: command.created_at + 1_000,
            reason: reason.map(String::from),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_without_touching_linked_records(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (stream_id, command, event_store, outbox, links) = before_each.await;
        let handler = RejectRequestHandler::new(TOPIC, event_store.clone(), outbox.clone());

        handler
            .handle(&stream_id, reject(&command, Some("double booked")))
            .await
            .expect("reject failed");

        let stream = event_store.load(&stream_id).await.unwrap();
        assert_eq!(fold(stream.events).status(), Some(RequestStatus::Rejected));
        assert_eq!(
            links.participation("event-fixed-0001", "artist-fixed-0001").await,
            Some(ParticipationStatus::Pending)
        );
        assert_eq!(
            outbox.event_types().await,
            vec!["RequestSubmitted".to_string(), "RequestRejected".to_string()]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_reject_twice(#[future] before_each: BeforeEachReturn) {
        let (stream_id, command, event_store, outbox, _) = before_each.await;
        let handler = RejectRequestHandler::new(TOPIC, event_store, outbox);
        handler
            .handle(&stream_id, reject(&command, None))
            .await
            .expect("first reject failed");

        let result = handler.handle(&stream_id, reject(&command, None)).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::NotPending(
                RequestStatus::Rejected
            )))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_event_store_is_offline(#[future] before_each: BeforeEachReturn) {
        let (stream_id, command, event_store, outbox, _) = before_each.await;
        event_store.toggle_offline();
        let handler = RejectRequestHandler::new(TOPIC, event_store, outbox);
        let result = handler.handle(&stream_id, reject(&command, None)).await;
        assert!(matches!(result, Err(ApplicationError::EventStore(_))));
    }
}
