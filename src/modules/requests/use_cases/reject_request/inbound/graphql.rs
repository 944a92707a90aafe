use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::graphql::current_profile;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RejectRequestMutation;

#[Object]
impl RejectRequestMutation {
    async fn reject_request(
        &self,
        context: &Context<'_>,
        request_id: ID,
        reason: Option<String>,
    ) -> GqlResult<ID> {
        let profile = current_profile(context)?;
        let state = context.data_unchecked::<AppState>();
        let stream_id = request_stream_id(&request_id);

        let command = RejectRequest {
            request_id: request_id.to_string(),
            rejected_by: profile.profile_id,
            rejected_at: now_millis(),
            reason,
        };
        state
            .reject_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state.refresh(&stream_id).await;

        Ok(request_id)
    }
}
