pub mod v1 {
    pub mod request_acceptance_reverted;
    pub mod request_accepted;
    pub mod request_expired;
    pub mod request_rejected;
    pub mod request_submitted;
}

use v1::request_acceptance_reverted::RequestAcceptanceRevertedV1;
use v1::request_accepted::RequestAcceptedV1;
use v1::request_expired::RequestExpiredV1;
use v1::request_rejected::RequestRejectedV1;
use v1::request_submitted::RequestSubmittedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RequestEvent {
    RequestSubmittedV1(RequestSubmittedV1),
    RequestAcceptedV1(RequestAcceptedV1),
    RequestRejectedV1(RequestRejectedV1),
    RequestExpiredV1(RequestExpiredV1),
    RequestAcceptanceRevertedV1(RequestAcceptanceRevertedV1),
}
