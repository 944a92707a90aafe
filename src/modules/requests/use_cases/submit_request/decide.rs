use crate::modules::requests::core::{
    decision::{DecideError, Decision, ensure_max_len},
    events::{RequestEvent, v1::request_submitted::RequestSubmittedV1},
    intents::RequestIntent,
    kind::RequestSubject,
    state::RequestState,
};
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::shared::core::primitives::normalize_text;

pub const MAX_MESSAGE_LEN: usize = 1000;

/// `default_ttl_ms` is added to `created_at` when the command carries no expiry.
pub fn decide_submit(state: &RequestState, command: SubmitRequest, default_ttl_ms: i64) -> Decision {
    match state {
        RequestState::None => match build_submitted(command, default_ttl_ms) {
            Ok(payload) => Decision::Accepted {
                events: vec![RequestEvent::RequestSubmittedV1(payload.clone())],
                intents: vec![RequestIntent::PublishRequestSubmitted { payload }],
            },
            Err(reason) => Decision::Rejected { reason },
        },
        _ => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}

fn build_submitted(command: SubmitRequest, default_ttl_ms: i64) -> Result<RequestSubmittedV1, DecideError> {
    let request_id = required("request_id", command.request_id)?;
    let requester_id = required("requester_id", command.requester_id)?;
    let target_id = required("target_id", command.target_id)?;
    if requester_id == target_id {
        return Err(DecideError::SelfRequest);
    }
    let subject = RequestSubject::resolve(
        command.kind,
        &requester_id,
        &target_id,
        command.subject_id.as_deref(),
    )?;

    let expires_at = match command.expires_at {
        Some(expires_at) => expires_at,
        None => command
            .created_at
            .checked_add(default_ttl_ms)
            .ok_or(DecideError::InvalidExpiry)?,
    };
    if expires_at <= command.created_at {
        return Err(DecideError::InvalidExpiry);
    }

    let message = normalize_text(command.message);
    ensure_max_len("message", message.as_deref(), MAX_MESSAGE_LEN)?;

    let created_by = match command.created_by.trim() {
        "" => requester_id.clone(),
        actor => actor.to_string(),
    };

    Ok(RequestSubmittedV1 {
        request_id,
        requester_id,
        target_id,
        subject,
        message,
        created_at: command.created_at,
        expires_at,
        created_by,
    })
}

fn required(field: &'static str, value: String) -> Result<String, DecideError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DecideError::MissingField(field));
    }
    Ok(value.to_string())
}
