use crate::modules::requests::adapters::outbound::linked_records_in_memory::InMemoryLinkedRecords;
use crate::modules::requests::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::use_cases::accept_request::handler::AcceptRequestHandler;
use crate::modules::requests::use_cases::expire_request::handler::ExpireRequestHandler;
use crate::modules::requests::use_cases::query_requests::handler::Projector;
use crate::modules::requests::use_cases::query_requests::queries_port::RequestQueries;
use crate::modules::requests::use_cases::reject_request::handler::RejectRequestHandler;
use crate::modules::requests::use_cases::submit_request::handler::SubmitRequestHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::session::SessionResolver;
use crate::shell::config::AppConfig;
use std::sync::Arc;
use tracing::error;

type Events = InMemoryEventStore<RequestEvent>;

pub const PROJECTOR_NAME: &str = "request_summary";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn RequestQueries + Send + Sync>,
    pub sessions: Arc<dyn SessionResolver>,
    pub submit_handler: Arc<SubmitRequestHandler<Events, InMemoryDomainOutbox, InMemoryLinkedRecords>>,
    pub accept_handler: Arc<
        AcceptRequestHandler<Events, InMemoryDomainOutbox, InMemoryLinkedRecords, InMemoryLinkedRecords>,
    >,
    pub reject_handler: Arc<RejectRequestHandler<Events, InMemoryDomainOutbox>>,
    pub expire_handler: Arc<ExpireRequestHandler<Events, InMemoryDomainOutbox>>,
    pub event_store: Arc<Events>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
}

impl AppState {
    /// Wire every handler onto in-memory adapters. Linked records and sessions
    /// are passed in so callers can seed and inspect them.
    pub fn in_memory(
        config: &AppConfig,
        links: Arc<InMemoryLinkedRecords>,
        sessions: Arc<dyn SessionResolver>,
    ) -> Self {
        Self::with_stores(
            config,
            Arc::new(InMemoryEventStore::new()),
            Arc::new(InMemoryDomainOutbox::new()),
            Arc::new(InMemoryProjections::new()),
            links,
            sessions,
        )
    }

    pub fn with_stores(
        config: &AppConfig,
        event_store: Arc<Events>,
        outbox: Arc<InMemoryDomainOutbox>,
        projections: Arc<InMemoryProjections>,
        links: Arc<InMemoryLinkedRecords>,
        sessions: Arc<dyn SessionResolver>,
    ) -> Self {
        let topic = config.outbox_topic.as_str();
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        Self {
            queries: projections,
            sessions,
            submit_handler: Arc::new(SubmitRequestHandler::new(
                topic,
                config.default_ttl_ms(),
                event_store.clone(),
                outbox.clone(),
                links.clone(),
            )),
            accept_handler: Arc::new(AcceptRequestHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
                links.clone(),
                links,
            )),
            reject_handler: Arc::new(RejectRequestHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
            )),
            expire_handler: Arc::new(ExpireRequestHandler::new(topic, event_store.clone(), outbox)),
            event_store,
            projector,
        }
    }

    /// Bring the read model up to date with a stream right after a command,
    /// so queries see the change immediately.
    pub async fn project(&self, stream_id: &str) -> anyhow::Result<()> {
        let loaded = self.event_store.load(stream_id).await?;
        self.projector.apply_stream(stream_id, &loaded.events).await
    }

    /// Like [`AppState::project`], but a failure only gets logged: the command
    /// already succeeded and the read model catches up on the next replay.
    pub async fn refresh(&self, stream_id: &str) {
        if let Err(e) = self.project(stream_id).await {
            error!(stream_id, error = %e, "failed to project request stream");
        }
    }
}
