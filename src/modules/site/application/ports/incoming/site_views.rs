use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteViewError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait SiteViewsUseCase: Send + Sync {
    /// Profile, up to four featured projects and the skill groups.
    async fn home(&self) -> Result<Value, SiteViewError>;

    /// Profile, experiences split by type, education, skills and awards.
    async fn about(&self) -> Result<Value, SiteViewError>;

    /// Every project, newest first.
    async fn projects(&self) -> Result<Value, SiteViewError>;
}
