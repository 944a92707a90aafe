use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::requests::core::kind::RequestKind;
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::response::{failure, success, unauthenticated};
use crate::shell::session::CurrentProfile;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequestBody {
    pub request_id: Option<String>,
    pub kind: RequestKind,
    pub target_id: String,
    pub subject_id: Option<String>,
    pub message: Option<String>,
    pub expires_at: Option<i64>,
}

#[derive(Serialize)]
pub struct SubmitRequestResponse {
    pub request_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    profile: Option<Extension<CurrentProfile>>,
    body: Result<Json<SubmitRequestBody>, JsonRejection>,
) -> Response {
    let Some(Extension(profile)) = profile else {
        return unauthenticated();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return failure(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()),
    };

    let request_id = body
        .request_id
        .unwrap_or_else(|| Uuid::now_v7().to_string());
    let stream_id = request_stream_id(&request_id);

    let command = SubmitRequest {
        request_id: request_id.clone(),
        kind: body.kind,
        requester_id: profile.profile_id.clone(),
        target_id: body.target_id,
        subject_id: body.subject_id,
        message: body.message,
        created_at: now_millis(),
        expires_at: body.expires_at,
        created_by: profile.profile_id,
    };

    match state.submit_handler.handle(&stream_id, command).await {
        Ok(()) => {
            state.refresh(&stream_id).await;
            success(StatusCode::CREATED, SubmitRequestResponse { request_id })
        }
        Err(e) => e.into_response(),
    }
}
