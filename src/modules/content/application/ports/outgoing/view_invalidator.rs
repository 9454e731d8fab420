use async_trait::async_trait;

use crate::modules::content::application::domain::resource::InvalidationEvent;

#[async_trait]
pub trait ViewInvalidator: Send + Sync {
    async fn invalidate(&self, event: &InvalidationEvent);
}

/// Invalidator that drops every event. Used by the seed command.
pub struct NoopInvalidator;

#[async_trait]
impl ViewInvalidator for NoopInvalidator {
    async fn invalidate(&self, _event: &InvalidationEvent) {}
}
