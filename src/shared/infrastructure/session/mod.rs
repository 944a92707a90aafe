use async_trait::async_trait;

/// Resolves a session cookie value to the profile that owns the session.
/// Session issuance lives with the authentication provider; this crate only looks tokens up.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> anyhow::Result<Option<String>>;
}

pub mod in_memory;
