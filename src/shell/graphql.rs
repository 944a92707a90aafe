use async_graphql::{Context, EmptySubscription, MergedObject, Result as GqlResult, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::requests::use_cases::accept_request::inbound::graphql::AcceptRequestMutation;
pub use crate::modules::requests::use_cases::query_requests::inbound::graphql::QueryRoot;
pub use crate::modules::requests::use_cases::reject_request::inbound::graphql::RejectRequestMutation;
pub use crate::modules::requests::use_cases::submit_request::inbound::graphql::SubmitRequestMutation;
pub use crate::shell::state::AppState;
use crate::shell::session::CurrentProfile;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitRequestMutation, AcceptRequestMutation, RejectRequestMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Profile attached by the session middleware, required by every mutation.
pub fn current_profile(context: &Context<'_>) -> GqlResult<CurrentProfile> {
    context
        .data_opt::<CurrentProfile>()
        .cloned()
        .ok_or_else(|| async_graphql::Error::new("not authenticated"))
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    profile: Option<Extension<CurrentProfile>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(Extension(profile)) = profile {
        request = request.data(profile);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
