use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::query_requests::projection::{RequestRow, StatusPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(RequestRow),
    Patch(StatusPatch),
}

/// Translate one event into read model mutations.
/// `last_event_id` is `"{stream_id}:{version}"` of the event that produced the row state.
pub fn apply(stream_id: &str, version: i64, event: &RequestEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        RequestEvent::RequestSubmittedV1(details) => vec![Mutation::Upsert(RequestRow {
            request_id: details.request_id.clone(),
            kind: details.subject.kind(),
            requester_id: details.requester_id.clone(),
            target_id: details.target_id.clone(),
            subject_id: details.subject.subject_id().to_string(),
            status: RequestStatus::Pending,
            message: details.message.clone(),
            created_at: details.created_at,
            expires_at: details.expires_at,
            responded_at: None,
            rejection_reason: None,
            last_event_id: Some(stream_key),
        })],
        RequestEvent::RequestAcceptedV1(e) => vec![Mutation::Patch(StatusPatch {
            request_id: e.request_id.clone(),
            status: RequestStatus::Accepted,
            responded_at: Some(e.accepted_at),
            rejection_reason: None,
            last_event_id: stream_key,
        })],
        RequestEvent::RequestRejectedV1(e) => vec![Mutation::Patch(StatusPatch {
            request_id: e.request_id.clone(),
            status: RequestStatus::Rejected,
            responded_at: Some(e.rejected_at),
            rejection_reason: e.reason.clone(),
            last_event_id: stream_key,
        })],
        RequestEvent::RequestExpiredV1(e) => vec![Mutation::Patch(StatusPatch {
            request_id: e.request_id.clone(),
            status: RequestStatus::Expired,
            responded_at: None,
            rejection_reason: None,
            last_event_id: stream_key,
        })],
        RequestEvent::RequestAcceptanceRevertedV1(e) => vec![Mutation::Patch(StatusPatch {
            request_id: e.request_id.clone(),
            status: RequestStatus::Pending,
            responded_at: None,
            rejection_reason: None,
            last_event_id: stream_key,
        })],
    }
}
