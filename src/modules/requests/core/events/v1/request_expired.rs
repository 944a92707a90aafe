#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RequestExpiredV1 {
    pub request_id: String,
    pub expired_at: i64,
}
