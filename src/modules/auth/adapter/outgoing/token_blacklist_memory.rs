use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TOKEN_LEEWAY_SECS;
use crate::modules::auth::application::services::hash::token_hasher::hash_token;

/// Process-local revocation list keyed by token digest.
#[derive(Default)]
pub struct InMemoryTokenBlacklist {
    entries: RwLock<HashMap<String, i64>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn revoke(&self, token: &str, expires_at: i64) {
        let now = Utc::now().timestamp();
        let mut entries = self.entries.write().await;

        // Kept until verification would reject the token on its own
        entries.retain(|_, exp| exp.saturating_add(TOKEN_LEEWAY_SECS) >= now);
        entries.insert(hash_token(token), expires_at);
    }

    async fn is_revoked(&self, token: &str) -> bool {
        self.entries.read().await.contains_key(&hash_token(token))
    }
}
