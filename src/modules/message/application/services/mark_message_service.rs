use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::content::application::domain::resource::{InvalidationEvent, Resource};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentMutationError, MutationReceipt,
};
use crate::modules::content::application::ports::outgoing::view_invalidator::ViewInvalidator;
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::mark_message::MarkMessageUseCase;
use crate::modules::message::application::ports::outgoing::message_status::MessageStatusRepository;

pub struct MarkMessageService<R>
where
    R: MessageStatusRepository,
{
    repository: R,
    invalidator: Arc<dyn ViewInvalidator>,
}

impl<R> MarkMessageService<R>
where
    R: MessageStatusRepository,
{
    pub fn new(repository: R, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            repository,
            invalidator,
        }
    }
}

#[async_trait]
impl<R> MarkMessageUseCase for MarkMessageService<R>
where
    R: MessageStatusRepository,
{
    async fn execute(&self, id: i32, read: bool) -> Result<MutationReceipt, ContentMutationError> {
        let state = if read { "read" } else { "unread" };

        let found = self.repository.set_read(id, read).await.map_err(|e| {
            error!(id, error = %e, "Failed to mark message {}", state);
            ContentMutationError::StoreFailure("Failed to update message".to_string())
        })?;

        if !found {
            return Err(ContentMutationError::NotFound(Message::LABEL));
        }

        info!(id, state, "Message status changed");
        self.invalidator
            .invalidate(&InvalidationEvent::for_resource::<Message>())
            .await;

        Ok(MutationReceipt::new(
            Some(id),
            format!("Message marked as {}", state),
        ))
    }
}
