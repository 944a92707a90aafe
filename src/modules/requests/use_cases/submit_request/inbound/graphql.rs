use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::requests::core::kind::RequestKind;
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::graphql::current_profile;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitRequestMutation;

#[Object]
impl SubmitRequestMutation {
    /// `kind` is one of `event_invite`, `band_join` or `representation`.
    async fn submit_request(
        &self,
        context: &Context<'_>,
        kind: String,
        target_id: String,
        subject_id: Option<String>,
        message: Option<String>,
        expires_at: Option<i64>,
    ) -> GqlResult<ID> {
        let profile = current_profile(context)?;
        let state = context.data_unchecked::<AppState>();
        let kind: RequestKind = kind.parse().map_err(async_graphql::Error::new)?;

        let request_id = Uuid::now_v7().to_string();
        let stream_id = request_stream_id(&request_id);
        let command = SubmitRequest {
            request_id: request_id.clone(),
            kind,
            requester_id: profile.profile_id.clone(),
            target_id,
            subject_id,
            message,
            created_at: now_millis(),
            expires_at,
            created_by: profile.profile_id,
        };

        state
            .submit_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Inline projection so queries see the new row immediately
        state.refresh(&stream_id).await;

        Ok(ID(request_id))
    }
}
