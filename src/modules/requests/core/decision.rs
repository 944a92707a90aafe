use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::intents::RequestIntent;
use crate::modules::requests::core::kind::{RequestKind, RequestStatus};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("request already exists")]
    AlreadyExists,

    #[error("request not found")]
    NotFound,

    #[error("request is no longer pending (status: {0})")]
    NotPending(RequestStatus),

    #[error("request has expired")]
    Expired,

    #[error("request has not expired yet")]
    NotYetExpired,

    #[error("only the addressed profile can respond to this request")]
    NotAddressee,

    #[error("a profile cannot send a request to itself")]
    SelfRequest,

    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("a {0} request must name its subject")]
    MissingSubject(RequestKind),

    #[error("{0} is not a party of the request")]
    SubjectNotAParty(String),

    #[error("expiry must be after creation")]
    InvalidExpiry,

    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("accepting would overlap another confirmed event")]
    ScheduleConflict,
}

pub enum Decision {
    Accepted {
        events: Vec<RequestEvent>,
        intents: Vec<RequestIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

pub fn ensure_max_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), DecideError> {
    match value {
        Some(v) if v.chars().count() > max => Err(DecideError::TooLong { field, max }),
        _ => Ok(()),
    }
}
