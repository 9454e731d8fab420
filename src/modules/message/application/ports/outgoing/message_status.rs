use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;

#[async_trait]
pub trait MessageStatusRepository: Send + Sync {
    /// Returns `false` when no message has this id.
    async fn set_read(&self, id: i32, read: bool) -> Result<bool, ContentRepositoryError>;
}
