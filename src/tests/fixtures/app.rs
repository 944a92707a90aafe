// Fully wired in-memory application for HTTP, GraphQL and worker tests.

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::requests::adapters::outbound::linked_records_in_memory::InMemoryLinkedRecords;
use crate::modules::requests::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::requests::core::events::RequestEvent;
use crate::shared::core::primitives::{MILLIS_PER_DAY, now_millis, request_stream_id};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::session::in_memory::InMemorySessions;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::submit_request::SubmitRequestBuilder;

pub const VENUE_TOKEN: &str = "token-venue-fixed-0001";
pub const ARTIST_TOKEN: &str = "token-artist-fixed-0001";
pub const FIXTURE_REQUEST_ID: &str = "req-http-0001";

pub struct TestApp {
    pub state: AppState,
    pub event_store: Arc<InMemoryEventStore<RequestEvent>>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub links: Arc<InMemoryLinkedRecords>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Submit the fixture invite (venue to artist) as of now and return its expiry.
    pub async fn submit_fixture(&self) -> i64 {
        let created_at = now_millis();
        let expires_at = created_at + 14 * MILLIS_PER_DAY;
        let command = SubmitRequestBuilder::new()
            .request_id(FIXTURE_REQUEST_ID)
            .created_at(created_at)
            .expires_at(Some(expires_at))
            .build();
        let stream_id = request_stream_id(FIXTURE_REQUEST_ID);
        self.state
            .submit_handler
            .handle(&stream_id, command)
            .await
            .expect("submit failed");
        self.state.project(&stream_id).await.expect("project failed");
        expires_at
    }

    /// Read model view of a request as JSON.
    pub async fn view(&self, request_id: &str) -> serde_json::Value {
        let view = self
            .state
            .queries
            .get_by_id(request_id)
            .await
            .expect("get failed")
            .expect("request not projected");
        serde_json::to_value(view).unwrap()
    }
}

async fn build(event_store: InMemoryEventStore<RequestEvent>, projections: InMemoryProjections) -> TestApp {
    let sessions = InMemorySessions::new();
    sessions.insert(VENUE_TOKEN, "venue-fixed-0001").await;
    sessions.insert(ARTIST_TOKEN, "artist-fixed-0001").await;

    let event_store = Arc::new(event_store);
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let links = Arc::new(InMemoryLinkedRecords::new());
    let state = AppState::with_stores(
        &AppConfig::default(),
        event_store.clone(),
        outbox.clone(),
        Arc::new(projections),
        links.clone(),
        Arc::new(sessions),
    );
    TestApp {
        state,
        event_store,
        outbox,
        links,
    }
}

pub async fn make_test_app() -> TestApp {
    build(InMemoryEventStore::new(), InMemoryProjections::new()).await
}

pub async fn make_offline_event_store_app() -> TestApp {
    let event_store = InMemoryEventStore::new();
    event_store.toggle_offline();
    build(event_store, InMemoryProjections::new()).await
}

pub async fn make_offline_projections_app() -> TestApp {
    let mut projections = InMemoryProjections::new();
    projections.toggle_offline();
    build(InMemoryEventStore::new(), projections).await
}

pub fn post_json(uri: &str, session: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(token) = session {
        builder = builder.header("cookie", format!("session={token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
