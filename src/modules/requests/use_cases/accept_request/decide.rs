use crate::modules::requests::core::{
    decision::{DecideError, Decision},
    events::{
        RequestEvent,
        v1::{
            request_acceptance_reverted::RequestAcceptanceRevertedV1,
            request_accepted::RequestAcceptedV1,
        },
    },
    intents::RequestIntent,
    kind::RequestStatus,
    state::RequestState,
};
use crate::modules::requests::use_cases::accept_request::command::AcceptRequest;

pub fn decide_accept(state: &RequestState, command: AcceptRequest) -> Decision {
    let details = match state.pending() {
        Ok(details) => details,
        Err(reason) => return Decision::Rejected { reason },
    };
    if command.accepted_by != details.target_id {
        return Decision::Rejected {
            reason: DecideError::NotAddressee,
        };
    }
    if command.accepted_at >= details.expires_at {
        return Decision::Rejected {
            reason: DecideError::Expired,
        };
    }
    let payload = RequestAcceptedV1 {
        request_id: details.request_id.clone(),
        accepted_by: command.accepted_by,
        accepted_at: command.accepted_at,
    };
    Decision::Accepted {
        events: vec![RequestEvent::RequestAcceptedV1(payload.clone())],
        intents: vec![RequestIntent::PublishRequestAccepted {
            payload,
            subject: details.subject.clone(),
        }],
    }
}

/// Undo an acceptance whose linked record could not be updated. Nothing is
/// published, the acceptance intent only goes out once the record is handled.
pub fn decide_revert_acceptance(state: &RequestState, reverted_at: i64, cause: String) -> Decision {
    match state {
        RequestState::Accepted { details, .. } => Decision::Accepted {
            events: vec![RequestEvent::RequestAcceptanceRevertedV1(
                RequestAcceptanceRevertedV1 {
                    request_id: details.request_id.clone(),
                    reverted_at,
                    cause,
                },
            )],
            intents: vec![],
        },
        RequestState::None => Decision::Rejected {
            reason: DecideError::NotFound,
        },
        other => Decision::Rejected {
            reason: DecideError::NotPending(other.status().unwrap_or(RequestStatus::Pending)),
        },
    }
}
