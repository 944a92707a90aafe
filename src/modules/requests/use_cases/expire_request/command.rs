#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpireRequest {
    pub request_id: String,
    pub expired_at: i64,
}
