#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectRequest {
    pub request_id: String,
    pub rejected_by: String,
    pub rejected_at: i64,
    pub reason: Option<String>,
}
