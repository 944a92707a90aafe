// Shared test fixtures derived from the SubmitRequest command fixture.

use crate::modules::requests::core::events::v1::request_submitted::RequestSubmittedV1;
use crate::modules::requests::core::kind::{RequestStatus, RequestSubject};
use crate::modules::requests::core::state::RequestDetails;
use crate::modules::requests::use_cases::query_requests::projection::RequestRow;
use crate::shared::core::primitives::request_stream_id;
use crate::tests::fixtures::commands::submit_request::SubmitRequestBuilder;

/// Canonical submission event for tests.
pub fn make_request_submitted_v1_event() -> RequestSubmittedV1 {
    let command = SubmitRequestBuilder::new().build();
    RequestSubmittedV1 {
        request_id: command.request_id,
        subject: RequestSubject::EventInvite {
            event_id: command.subject_id.unwrap_or_default(),
            participant_id: command.target_id.clone(),
        },
        requester_id: command.requester_id,
        target_id: command.target_id,
        message: command.message,
        created_at: command.created_at,
        expires_at: command.expires_at.unwrap_or(command.created_at),
        created_by: command.created_by,
    }
}

pub fn make_request_details() -> RequestDetails {
    let event = make_request_submitted_v1_event();
    RequestDetails {
        request_id: event.request_id,
        requester_id: event.requester_id,
        target_id: event.target_id,
        subject: event.subject,
        message: event.message,
        created_at: event.created_at,
        expires_at: event.expires_at,
        created_by: event.created_by,
    }
}

/// Read model row as projected from the submission at version 1.
pub fn make_request_row() -> RequestRow {
    let event = make_request_submitted_v1_event();
    RequestRow {
        last_event_id: Some(format!("{}:1", request_stream_id(&event.request_id))),
        request_id: event.request_id,
        kind: event.subject.kind(),
        subject_id: event.subject.subject_id().to_string(),
        requester_id: event.requester_id,
        target_id: event.target_id,
        status: RequestStatus::Pending,
        message: event.message,
        created_at: event.created_at,
        expires_at: event.expires_at,
        responded_at: None,
        rejection_reason: None,
    }
}
