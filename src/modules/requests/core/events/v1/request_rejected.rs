#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RequestRejectedV1 {
    pub request_id: String,
    pub rejected_by: String,
    pub rejected_at: i64,
    pub reason: Option<String>,
}
