use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::accept_request::inbound::http::DecisionResponse;
use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::response::{failure, success, unauthenticated};
use crate::shell::session::CurrentProfile;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RejectRequestBody {
    pub request_id: String,
    pub reason: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    profile: Option<Extension<CurrentProfile>>,
    body: Result<Json<RejectRequestBody>, JsonRejection>,
) -> Response {
    let Some(Extension(profile)) = profile else {
        return unauthenticated();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return failure(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };

    let stream_id = request_stream_id(&body.request_id);
    let command = RejectRequest {
        request_id: body.request_id.clone(),
        rejected_by: profile.profile_id,
        rejected_at: now_millis(),
        reason: body.reason,
    };

    match state.reject_handler.handle(&stream_id, command).await {
        Ok(()) => {
            state.refresh(&stream_id).await;
            success(
                StatusCode::OK,
                DecisionResponse {
                    request_id: body.request_id,
                    status: RequestStatus::Rejected,
                },
            )
        }
        Err(e) => e.into_response(),
    }
}
