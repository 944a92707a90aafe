#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptRequest {
    pub request_id: String,
    pub accepted_by: String,
    pub accepted_at: i64,
}
