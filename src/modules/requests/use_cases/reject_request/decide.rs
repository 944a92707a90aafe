use crate::modules::requests::core::{
    decision::{DecideError, Decision, ensure_max_len},
    events::{RequestEvent, v1::request_rejected::RequestRejectedV1},
    intents::RequestIntent,
    state::RequestState,
};
use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
use crate::shared::core::primitives::normalize_text;

pub const MAX_REASON_LEN: usize = 500;

pub fn decide_reject(state: &RequestState, command: RejectRequest) -> Decision {
    let details = match state.pending() {
        Ok(details) => details,
        Err(reason) => return Decision::Rejected { reason },
    };
    if command.rejected_by != details.target_id {
        return Decision::Rejected {
            reason: DecideError::NotAddressee,
        };
    }
    if command.rejected_at >= details.expires_at {
        return Decision::Rejected {
            reason: DecideError::Expired,
        };
    }
    let reason = normalize_text(command.reason);
    if let Err(reason) = ensure_max_len("reason", reason.as_deref(), MAX_REASON_LEN) {
        return Decision::Rejected { reason };
    }
    let payload = RequestRejectedV1 {
        request_id: details.request_id.clone(),
        rejected_by: command.rejected_by,
        rejected_at: command.rejected_at,
        reason,
    };
    Decision::Accepted {
        events: vec![RequestEvent::RequestRejectedV1(payload.clone())],
        intents: vec![RequestIntent::PublishRequestRejected { payload }],
    }
}
