use crate::modules::requests::adapters::outbound::projections::{
    RequestProjectionRepository, WatermarkRepository,
};
use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::query_requests::projection::{
    RequestRow, RequestView, StatusPatch,
};
use crate::modules::requests::use_cases::query_requests::queries_port::{
    ProfileRequestsFilter, ProfileRole, RequestQueries,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, RequestRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("{what} offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RequestProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: RequestRow) -> anyhow::Result<()> {
        self.check_online("Projections repository")?;
        self.rows.write().await.insert(row.request_id.clone(), row);
        Ok(())
    }

    async fn patch(&self, patch: StatusPatch) -> anyhow::Result<()> {
        self.check_online("Projections repository")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(&patch.request_id)
            .ok_or_else(|| anyhow::anyhow!("no projected row for request {}", patch.request_id))?;
        row.patch(patch);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.check_online("Watermark repository")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.check_online("Watermark repository")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl RequestQueries for InMemoryProjections {
    async fn get_by_id(&self, request_id: &str) -> anyhow::Result<Option<RequestView>> {
        self.check_online("Projections repository")?;
        Ok(self
            .rows
            .read()
            .await
            .get(request_id)
            .cloned()
            .map(RequestView::from))
    }

    async fn list_for_profile(
        &self,
        filter: &ProfileRequestsFilter,
    ) -> anyhow::Result<Vec<RequestView>> {
        self.check_online("Projections repository")?;
        let guard = self.rows.read().await;

        let mut items: Vec<RequestRow> = guard
            .values()
            .filter(|row| match filter.role {
                ProfileRole::Requester => row.requester_id == filter.profile_id,
                ProfileRole::Target => row.target_id == filter.profile_id,
                ProfileRole::Any => {
                    row.requester_id == filter.profile_id || row.target_id == filter.profile_id
                }
            })
            .filter(|row| filter.status.is_none_or(|status| row.status == status))
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.request_id.cmp(&b.request_id))
        });

        Ok(items
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .map(RequestView::from)
            .collect())
    }

    async fn list_overdue(&self, now: i64, limit: u64) -> anyhow::Result<Vec<RequestView>> {
        self.check_online("Projections repository")?;
        let guard = self.rows.read().await;
        let mut items: Vec<RequestRow> = guard
            .values()
            .filter(|row| row.status == RequestStatus::Pending && row.expires_at <= now)
            .cloned()
            .collect();
        items.sort_by_key(|row| row.expires_at);
        Ok(items
            .into_iter()
            .take(limit as usize)
            .map(RequestView::from)
            .collect())
    }
}
