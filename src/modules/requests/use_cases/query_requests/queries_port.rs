use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::query_requests::projection::RequestView;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_LIST_LIMIT: u64 = 20;
pub const MAX_LIST_LIMIT: u64 = 100;

/// Side of the request the listed profile stands on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    Requester,
    Target,
    #[default]
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequestsFilter {
    pub profile_id: String,
    pub role: ProfileRole,
    pub status: Option<RequestStatus>,
    pub offset: u64,
    pub limit: u64,
}

impl ProfileRequestsFilter {
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            role: ProfileRole::Any,
            status: None,
            offset: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Page size for a caller-supplied limit: the default when absent, never above `MAX_LIST_LIMIT`.
pub fn page_limit(requested: Option<u64>) -> u64 {
    requested.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT)
}

#[async_trait]
pub trait RequestQueries {
    async fn get_by_id(&self, request_id: &str) -> anyhow::Result<Option<RequestView>>;

    /// Newest first.
    async fn list_for_profile(
        &self,
        filter: &ProfileRequestsFilter,
    ) -> anyhow::Result<Vec<RequestView>>;

    /// Pending requests whose expiry is at or before `now`, oldest expiry first.
    async fn list_overdue(&self, now: i64, limit: u64) -> anyhow::Result<Vec<RequestView>>;
}
