use crate::modules::requests::use_cases::query_requests::projection::{RequestRow, StatusPatch};
use async_trait::async_trait;

#[async_trait]
pub trait RequestProjectionRepository: Send + Sync {
    async fn upsert(&self, row: RequestRow) -> anyhow::Result<()>;

    /// Applies the patch to an existing row; patching an unknown request is an error.
    async fn patch(&self, patch: StatusPatch) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
