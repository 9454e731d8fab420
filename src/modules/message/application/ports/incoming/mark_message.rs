use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentMutationError, MutationReceipt,
};

#[async_trait]
pub trait MarkMessageUseCase: Send + Sync {
    /// Sets the read flag. Marking an already read message read again is
    /// not an error.
    async fn execute(&self, id: i32, read: bool) -> Result<MutationReceipt, ContentMutationError>;
}
