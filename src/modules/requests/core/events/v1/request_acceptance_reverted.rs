// Compensates a RequestAcceptedV1 whose secondary update could not be applied.
// Folding it returns the request to pending.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RequestAcceptanceRevertedV1 {
    pub request_id: String,
    pub reverted_at: i64,
    pub cause: String,
}
