use crate::modules::requests::adapters::outbound::projections::{
    RequestProjectionRepository, WatermarkRepository,
};
use crate::modules::requests::core::events::RequestEvent;
use crate::modules::requests::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: RequestProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: RequestProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &RequestEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch(patch) => self.repository.patch(patch).await?,
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Replay a whole stream. The submission upserts the row, so replaying is idempotent.
    pub async fn apply_stream(&self, stream_id: &str, events: &[RequestEvent]) -> anyhow::Result<()> {
        for (i, event) in events.iter().enumerate() {
            self.apply_one(stream_id, i as i64 + 1, event).await?;
        }
        Ok(())
    }
}
