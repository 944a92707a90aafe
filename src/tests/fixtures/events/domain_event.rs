// Minimal event type for exercising the generic event store.

#[derive(Debug, Clone, serde::Serialize)]
pub struct DomainEvent {
    pub name: &'static str,
}
