use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};

use crate::modules::requests::use_cases::accept_request::inbound::http as accept_http;
use crate::modules::requests::use_cases::query_requests::inbound::http as query_http;
use crate::modules::requests::use_cases::reject_request::inbound::http as reject_http;
use crate::modules::requests::use_cases::submit_request::inbound::http as submit_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::session::resolve_session;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/submit-request", post(submit_http::handle))
        .route("/accept-request", post(accept_http::handle))
        .route("/reject-request", post(reject_http::handle))
        .route("/get-request", get(query_http::get))
        .route("/list-requests", get(query_http::list))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_session))
        .with_state(state)
}
