use crate::modules::requests::core::kind::RequestSubject;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RequestSubmittedV1 {
    pub request_id: String,
    pub requester_id: String,
    pub target_id: String,
    pub subject: RequestSubject,
    pub message: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
    pub created_by: String,
}
