use crate::modules::requests::core::kind::{RequestKind, RequestStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRow {
    pub request_id: String,
    pub kind: RequestKind,
    pub requester_id: String,
    pub target_id: String,
    pub subject_id: String,
    pub status: RequestStatus,
    pub message: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
    pub responded_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub last_event_id: Option<String>,
}

/// Partial update of a row after a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPatch {
    pub request_id: String,
    pub status: RequestStatus,
    pub responded_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub last_event_id: String,
}

impl RequestRow {
    pub fn patch(&mut self, patch: StatusPatch) {
        self.status = patch.status;
        self.responded_at = patch.responded_at;
        self.rejection_reason = patch.rejection_reason;
        self.last_event_id = Some(patch.last_event_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestView {
    pub request_id: String,
    pub kind: RequestKind,
    pub requester_id: String,
    pub target_id: String,
    pub subject_id: String,
    pub status: RequestStatus,
    pub message: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
    pub responded_at: Option<i64>,
    pub rejection_reason: Option<String>,
}

impl From<RequestRow> for RequestView {
    fn from(row: RequestRow) -> Self {
        Self {
            request_id: row.request_id,
            kind: row.kind,
            requester_id: row.requester_id,
            target_id: row.target_id,
            subject_id: row.subject_id,
            status: row.status,
            message: row.message,
            created_at: row.created_at,
            expires_at: row.expires_at,
            responded_at: row.responded_at,
            rejection_reason: row.rejection_reason,
        }
    }
}
