use crate::modules::requests::core::intents::RequestIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::Serialize;

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<RequestIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            RequestIntent::PublishRequestSubmitted { payload } => {
                ("RequestSubmitted", payload.created_at, to_json(&payload)?)
            }
            RequestIntent::PublishRequestAccepted { payload, subject } => {
                let occurred_at = payload.accepted_at;
                let body = serde_json::json!({
                    "request_id": payload.request_id,
                    "accepted_by": payload.accepted_by,
                    "accepted_at": payload.accepted_at,
                    "subject": to_json(&subject)?,
                });
                ("RequestAccepted", occurred_at, body)
            }
            RequestIntent::PublishRequestRejected { payload } => {
                ("RequestRejected", payload.rejected_at, to_json(&payload)?)
            }
            RequestIntent::PublishRequestExpired { payload } => {
                ("RequestExpired", payload.expired_at, to_json(&payload)?)
            }
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

fn to_json(value: &impl Serialize) -> Result<serde_json::Value, OutboxError> {
    serde_json::to_value(value).map_err(|e| OutboxError::Validation(e.to_string()))
}
