use crate::modules::requests::core::events::v1::request_accepted::RequestAcceptedV1;
use crate::modules::requests::core::events::v1::request_expired::RequestExpiredV1;
use crate::modules::requests::core::events::v1::request_rejected::RequestRejectedV1;
use crate::modules::requests::core::events::v1::request_submitted::RequestSubmittedV1;
use crate::modules::requests::core::kind::RequestSubject;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestIntent {
    PublishRequestSubmitted {
        payload: RequestSubmittedV1,
    },
    PublishRequestAccepted {
        payload: RequestAcceptedV1,
        subject: RequestSubject,
    },
    PublishRequestRejected {
        payload: RequestRejectedV1,
    },
    PublishRequestExpired {
        payload: RequestExpiredV1,
    },
}
