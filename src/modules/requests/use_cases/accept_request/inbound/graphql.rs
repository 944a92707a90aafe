use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::requests::use_cases::accept_request::command::AcceptRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::graphql::current_profile;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AcceptRequestMutation;

#[Object]
impl AcceptRequestMutation {
    async fn accept_request(&self, context: &Context<'_>, request_id: ID) -> GqlResult<ID> {
        let profile = current_profile(context)?;
        let state = context.data_unchecked::<AppState>();
        let stream_id = request_stream_id(&request_id);

        let command = AcceptRequest {
            request_id: request_id.to_string(),
            accepted_by: profile.profile_id,
            accepted_at: now_millis(),
        };
        let result = state.accept_handler.handle(&stream_id, command).await;
        // A reverted acceptance also changed the stream.
        state.refresh(&stream_id).await;
        result.map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(request_id)
    }
}
