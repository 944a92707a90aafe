use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::requests::core::decision::DecideError;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;

/// Body of every HTTP response: `{ "success": true, "data": … }` or
/// `{ "success": false, "error": "…" }`.
#[derive(Debug, Serialize)]
pub struct ActionResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(ActionResult {
            success: true,
            data: Some(data),
            error: None,
        }),
    )
        .into_response()
}

pub fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ActionResult::<()> {
            success: false,
            data: None,
            error: Some(error.into()),
        }),
    )
        .into_response()
}

pub fn unauthenticated() -> Response {
    failure(StatusCode::UNAUTHORIZED, "not authenticated")
}

pub fn status_of(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(DecideError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_)
        | ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::EventStore(_)
        | ApplicationError::Outbox(_)
        | ApplicationError::LinkedRecords(_)
        | ApplicationError::ConflictCheck(_)
        | ApplicationError::AcceptanceReverted(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        failure(status_of(&self), self.to_string())
    }
}
