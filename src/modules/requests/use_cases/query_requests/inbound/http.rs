use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use tracing::error;

use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::query_requests::queries_port::{
    ProfileRequestsFilter, ProfileRole, page_limit,
};
use crate::shell::response::{failure, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetRequestParams {
    pub request_id: String,
}

#[derive(Deserialize)]
pub struct ListRequestsParams {
    pub profile_id: String,
    pub role: Option<ProfileRole>,
    pub status: Option<RequestStatus>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn get(State(state): State<AppState>, Query(params): Query<GetRequestParams>) -> Response {
    match state.queries.get_by_id(&params.request_id).await {
        Ok(Some(view)) => success(StatusCode::OK, view),
        Ok(None) => failure(StatusCode::NOT_FOUND, "request not found"),
        Err(e) => {
            error!(error = %e, "get request failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRequestsParams>,
) -> Response {
    let filter = ProfileRequestsFilter {
        profile_id: params.profile_id,
        role: params.role.unwrap_or_default(),
        status: params.status,
        offset: params.offset.unwrap_or(0),
        limit: page_limit(params.limit),
    };
    match state.queries.list_for_profile(&filter).await {
        Ok(views) => success(StatusCode::OK, views),
        Err(e) => {
            error!(error = %e, "list requests failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
