use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::{Deserialize, Serialize};

use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::accept_request::command::AcceptRequest;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::response::{failure, success, unauthenticated};
use crate::shell::session::CurrentProfile;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AcceptRequestBody {
    pub request_id: String,
}

#[derive(Serialize)]
pub struct DecisionResponse {
    pub request_id: String,
    pub status: RequestStatus,
}

pub async fn handle(
    State(state): State<AppState>,
    profile: Option<Extension<CurrentProfile>>,
    body: Result<Json<AcceptRequestBody>, JsonRejection>,
) -> Response {
    let Some(Extension(profile)) = profile else {
        return unauthenticated();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return failure(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };

    let stream_id = request_stream_id(&body.request_id);
    let command = AcceptRequest {
        request_id: body.request_id.clone(),
        accepted_by: profile.profile_id,
        accepted_at: now_millis(),
    };

    match state.accept_handler.handle(&stream_id, command).await {
        Ok(()) => {
            state.refresh(&stream_id).await;
            success(
                StatusCode::OK,
                DecisionResponse {
                    request_id: body.request_id,
                    status: RequestStatus::Accepted,
                },
            )
        }
        Err(e @ ApplicationError::AcceptanceReverted(_)) => {
            state.refresh(&stream_id).await;
            e.into_response()
        }
        Err(e) => e.into_response(),
    }
}
