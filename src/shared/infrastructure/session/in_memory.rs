use crate::shared::infrastructure::session::SessionResolver;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessions {
    sessions: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, token: impl Into<String>, profile_id: impl Into<String>) {
        self.sessions
            .write()
            .await
            .insert(token.into(), profile_id.into());
    }
}

#[async_trait::async_trait]
impl SessionResolver for InMemorySessions {
    async fn resolve(&self, token: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Session store offline"));
        }
        Ok(self.sessions.read().await.get(token).cloned())
    }
}
