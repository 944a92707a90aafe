#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RequestAcceptedV1 {
    pub request_id: String,
    pub accepted_by: String,
    pub accepted_at: i64,
}
