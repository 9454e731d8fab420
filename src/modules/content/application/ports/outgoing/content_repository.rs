use async_trait::async_trait;

use crate::modules::content::application::domain::resource::Resource;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    /// A unique index rejected the write (e.g. duplicate project slug).
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row could not be mapped back into its domain type.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentReader<R: Resource>: Send + Sync {
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, ContentRepositoryError>;
}

#[async_trait]
pub trait ContentWriter<R: Resource>: Send + Sync {
    async fn insert(&self, draft: R::Draft) -> Result<R, ContentRepositoryError>;

    /// Returns the number of rows removed (0 when the id did not exist).
    async fn delete(&self, id: i32) -> Result<u64, ContentRepositoryError>;
}

#[async_trait]
pub trait ContentEditor<R: Resource>: Send + Sync {
    /// Replaces every editable column of row `id`. `None` when no such row.
    async fn update(&self, id: i32, draft: R::Draft) -> Result<Option<R>, ContentRepositoryError>;
}
