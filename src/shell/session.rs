use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::shell::response::failure;
use crate::shell::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Profile behind the session cookie of the current request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentProfile {
    pub profile_id: String,
}

pub fn session_token(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
}

/// Attach the [`CurrentProfile`] to the request when the session cookie
/// resolves. Anonymous requests pass through; command handlers reject them.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(session_token)
        .map(str::to_string);

    if let Some(token) = token {
        match state.sessions.resolve(&token).await {
            Ok(Some(profile_id)) => {
                request
                    .extensions_mut()
                    .insert(CurrentProfile { profile_id });
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "session lookup failed");
                return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        }
    }

    next.run(request).await
}
