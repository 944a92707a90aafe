use crate::modules::requests::core::decision::DecideError;
use crate::modules::requests::core::kind::{RequestStatus, RequestSubject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDetails {
    pub request_id: String,
    pub requester_id: String,
    pub target_id: String,
    pub subject: RequestSubject,
    pub message: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    None,
    Pending {
        details: RequestDetails,
    },
    Accepted {
        details: RequestDetails,
        accepted_by: String,
        accepted_at: i64,
    },
    Rejected {
        details: RequestDetails,
        rejected_by: String,
        rejected_at: i64,
        reason: Option<String>,
    },
    Expired {
        details: RequestDetails,
        expired_at: i64,
    },
}

impl RequestState {
    pub fn status(&self) -> Option<RequestStatus> {
        match self {
            RequestState::None => None,
            RequestState::Pending { .. } => Some(RequestStatus::Pending),
            RequestState::Accepted { .. } => Some(RequestStatus::Accepted),
            RequestState::Rejected { .. } => Some(RequestStatus::Rejected),
            RequestState::Expired { .. } => Some(RequestStatus::Expired),
        }
    }

    /// Details of a request that can still be answered.
    pub fn pending(&self) -> Result<&RequestDetails, DecideError> {
        match self {
            RequestState::None => Err(DecideError::NotFound),
            RequestState::Pending { details } => Ok(details),
            RequestState::Accepted { .. } => Err(DecideError::NotPending(RequestStatus::Accepted)),
            RequestState::Rejected { .. } => Err(DecideError::NotPending(RequestStatus::Rejected)),
            RequestState::Expired { .. } => Err(DecideError::NotPending(RequestStatus::Expired)),
        }
    }

    pub fn details(&self) -> Option<&RequestDetails> {
        match self {
            RequestState::None => None,
            RequestState::Pending { details }
            | RequestState::Accepted { details, .. }
            | RequestState::Rejected { details, .. }
            | RequestState::Expired { details, .. } => Some(details),
        }
    }
}
