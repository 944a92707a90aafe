use crate::modules::requests::core::{
    decision::{DecideError, Decision},
    events::{RequestEvent, v1::request_expired::RequestExpiredV1},
    intents::RequestIntent,
    state::RequestState,
};
use crate::modules::requests::use_cases::expire_request::command::ExpireRequest;

pub fn decide_expire(state: &RequestState, command: ExpireRequest) -> Decision {
    let details = match state.pending() {
        Ok(details) => details,
        Err(reason) => return Decision::Rejected { reason },
    };
    if command.expired_at < details.expires_at {
        return Decision::Rejected {
            reason: DecideError::NotYetExpired,
        };
    }
    let payload = RequestExpiredV1 {
        request_id: details.request_id.clone(),
        expired_at: command.expired_at,
    };
    Decision::Accepted {
        events: vec![RequestEvent::RequestExpiredV1(payload.clone())],
        intents: vec![RequestIntent::PublishRequestExpired { payload }],
    }
}
