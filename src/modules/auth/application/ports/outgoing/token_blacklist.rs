use async_trait::async_trait;

/// Revoked session tokens, remembered until they would have expired anyway.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, token: &str, expires_at: i64);
    async fn is_revoked(&self, token: &str) -> bool;
}
