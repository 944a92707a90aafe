use crate::modules::requests::adapters::outbound::conflict_check::ConflictCheckError;
use crate::modules::requests::adapters::outbound::linked_records::LinkedRecordsError;
use crate::modules::requests::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error(transparent)]
    LinkedRecords(#[from] LinkedRecordsError),

    #[error(transparent)]
    ConflictCheck(#[from] ConflictCheckError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("acceptance reverted: {0}")]
    AcceptanceReverted(String),
}
