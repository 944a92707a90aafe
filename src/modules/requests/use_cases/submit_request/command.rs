use crate::modules::requests::core::kind::RequestKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub request_id: String,
    pub kind: RequestKind,
    pub requester_id: String,
    pub target_id: String,
    /// Event id for invites, band id for band joins, artist id for representation.
    pub subject_id: Option<String>,
    pub message: Option<String>,
    pub created_at: i64,
    /// None means "use the configured default time to live".
    pub expires_at: Option<i64>,
    pub created_by: String,
}
