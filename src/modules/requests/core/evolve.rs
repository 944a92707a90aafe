use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::state::{RequestDetails, RequestState};

/// Fold one event into the request state. Events that do not fit the current
/// state leave it untouched. The only way out of a terminal state is a
/// reverted acceptance, which puts an accepted request back to pending.
pub fn evolve(state: RequestState, event: RequestEvent) -> RequestState {
    match (state, event) {
        (RequestState::None, RequestEvent::RequestSubmittedV1(e)) => RequestState::Pending {
            details: RequestDetails {
                request_id: e.request_id,
                requester_id: e.requester_id,
                target_id: e.target_id,
                subject: e.subject,
                message: e.message,
                created_at: e.created_at,
                expires_at: e.expires_at,
                created_by: e.created_by,
            },
        },
        (RequestState::Pending { details }, RequestEvent::RequestAcceptedV1(e)) => {
            RequestState::Accepted {
                details,
                accepted_by: e.accepted_by,
                accepted_at: e.accepted_at,
            }
        }
        (RequestState::Pending { details }, RequestEvent::RequestRejectedV1(e)) => {
            RequestState::Rejected {
                details,
                rejected_by: e.rejected_by,
                rejected_at: e.rejected_at,
                reason: e.reason,
            }
        }
        (RequestState::Pending { details }, RequestEvent::RequestExpiredV1(e)) => {
            RequestState::Expired {
                details,
                expired_at: e.expired_at,
            }
        }
        (RequestState::Accepted { details, .. }, RequestEvent::RequestAcceptanceRevertedV1(_)) => {
            RequestState::Pending { details }
        }
        (state, _) => state,
    }
}

pub fn fold(events: impl IntoIterator<Item = RequestEvent>) -> RequestState {
    events.into_iter().fold(RequestState::None, evolve)
}
