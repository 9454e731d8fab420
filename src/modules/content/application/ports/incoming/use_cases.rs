use async_trait::async_trait;
use serde::Serialize;

use crate::modules::content::application::domain::resource::Resource;

//
// ──────────────────────────────────────────────────────────
// Results
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub message: String,
}

impl MutationReceipt {
    pub fn new(id: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentMutationError {
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Carries the user facing message, e.g. "Failed to create project".
    #[error("{0}")]
    StoreFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListContentError {
    #[error("Failed to load {0}: {1}")]
    QueryFailed(&'static str, String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateContentUseCase<R: Resource>: Send + Sync {
    async fn execute(&self, draft: R::Draft) -> Result<MutationReceipt, ContentMutationError>;
}

#[async_trait]
pub trait UpdateContentUseCase<R: Resource>: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        draft: R::Draft,
    ) -> Result<MutationReceipt, ContentMutationError>;
}

#[async_trait]
pub trait DeleteContentUseCase<R: Resource>: Send + Sync {
    async fn execute(&self, id: i32) -> Result<MutationReceipt, ContentMutationError>;
}

#[async_trait]
pub trait ListContentUseCase<R: Resource>: Send + Sync {
    async fn execute(&self, filter: &R::Filter) -> Result<Vec<R>, ListContentError>;
}
