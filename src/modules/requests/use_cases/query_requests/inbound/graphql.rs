use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::requests::core::kind::RequestStatus;
use crate::modules::requests::use_cases::query_requests::projection::RequestView;
use crate::modules::requests::use_cases::query_requests::queries_port::{
    ProfileRequestsFilter, ProfileRole, page_limit,
};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRequest {
    pub request_id: ID,
    pub kind: String,
    pub requester_id: String,
    pub target_id: String,
    pub subject_id: String,
    pub status: String,
    pub message: Option<String>,
    pub created_at: i64,
    pub expires_at: i64,
    pub responded_at: Option<i64>,
    pub rejection_reason: Option<String>,
}

impl From<RequestView> for GqlRequest {
    fn from(v: RequestView) -> Self {
        Self {
            request_id: ID(v.request_id),
            kind: v.kind.to_string(),
            requester_id: v.requester_id,
            target_id: v.target_id,
            subject_id: v.subject_id,
            status: v.status.to_string(),
            message: v.message,
            created_at: v.created_at,
            expires_at: v.expires_at,
            responded_at: v.responded_at,
            rejection_reason: v.rejection_reason,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn request(&self, context: &Context<'_>, request_id: ID) -> GqlResult<Option<GqlRequest>> {
        let state = context.data_unchecked::<AppState>();
        let view = state.queries.get_by_id(&request_id).await?;
        Ok(view.map(Into::into))
    }

    /// `role` is `requester`, `target` or `any`; `status` uses the stored status values.
    async fn requests_for_profile(
        &self,
        context: &Context<'_>,
        profile_id: String,
        role: Option<String>,
        status: Option<String>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlRequest>> {
        let state = context.data_unchecked::<AppState>();
        let role = match role.as_deref() {
            None | Some("any") => ProfileRole::Any,
            Some("requester") => ProfileRole::Requester,
            Some("target") => ProfileRole::Target,
            Some(other) => return Err(format!("unknown role: {other}").into()),
        };
        let status = status
            .map(|s| s.parse::<RequestStatus>())
            .transpose()
            .map_err(async_graphql::Error::new)?;
        let filter = ProfileRequestsFilter {
            profile_id,
            role,
            status,
            offset: offset.unwrap_or(0).max(0) as u64,
            limit: page_limit(limit.map(|l| l.max(0) as u64)),
        };
        let list = state.queries.list_for_profile(&filter).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
