use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::content::application::domain::resource::{InvalidationEvent, Resource};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentMutationError, CreateContentUseCase, DeleteContentUseCase, ListContentError,
    ListContentUseCase, MutationReceipt, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentWriter,
};
use crate::modules::content::application::ports::outgoing::view_invalidator::ViewInvalidator;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// CRUD for any [`Resource`]. Each use case trait is implemented as long as
/// the repository provides the matching outgoing port.
pub struct ContentService<R, Repo> {
    repository: Repo,
    invalidator: Arc<dyn ViewInvalidator>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> ContentService<R, Repo>
where
    R: Resource,
{
    pub fn new(repository: Repo, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            repository,
            invalidator,
            _resource: PhantomData,
        }
    }

    async fn publish(&self) {
        self.invalidator
            .invalidate(&InvalidationEvent::for_resource::<R>())
            .await;
    }

    fn failure(verb: &str) -> ContentMutationError {
        ContentMutationError::StoreFailure(format!(
            "Failed to {} {}",
            verb,
            R::LABEL.to_lowercase()
        ))
    }

    fn success(id: Option<i32>, verb: &str) -> MutationReceipt {
        MutationReceipt::new(id, format!("{} {} successfully", R::LABEL, verb))
    }
}

#[async_trait]
impl<R, Repo> CreateContentUseCase<R> for ContentService<R, Repo>
where
    R: Resource,
    Repo: ContentWriter<R>,
{
    async fn execute(&self, draft: R::Draft) -> Result<MutationReceipt, ContentMutationError> {
        let created = self.repository.insert(draft).await.map_err(|e| {
            error!(kind = %R::KIND, error = %e, "Failed to create record");
            Self::failure("create")
        })?;

        info!(kind = %R::KIND, id = created.id(), "Record created");
        self.publish().await;

        Ok(Self::success(Some(created.id()), "created"))
    }
}

#[async_trait]
impl<R, Repo> UpdateContentUseCase<R> for ContentService<R, Repo>
where
    R: Resource,
    Repo: ContentEditor<R>,
{
    async fn execute(
        &self,
        id: i32,
        draft: R::Draft,
    ) -> Result<MutationReceipt, ContentMutationError> {
        let updated = self.repository.update(id, draft).await.map_err(|e| {
            error!(kind = %R::KIND, id, error = %e, "Failed to update record");
            Self::failure("update")
        })?;

        let Some(updated) = updated else {
            return Err(ContentMutationError::NotFound(R::LABEL));
        };

        info!(kind = %R::KIND, id = updated.id(), "Record updated");
        self.publish().await;

        Ok(Self::success(Some(updated.id()), "updated"))
    }
}

#[async_trait]
impl<R, Repo> DeleteContentUseCase<R> for ContentService<R, Repo>
where
    R: Resource,
    Repo: ContentWriter<R>,
{
    async fn execute(&self, id: i32) -> Result<MutationReceipt, ContentMutationError> {
        // Deleting a missing row is a no-op, not an error
        let removed = self.repository.delete(id).await.map_err(|e| {
            error!(kind = %R::KIND, id, error = %e, "Failed to delete record");
            Self::failure("delete")
        })?;

        info!(kind = %R::KIND, id, removed, "Record deleted");
        self.publish().await;

        Ok(Self::success(None, "deleted"))
    }
}

#[async_trait]
impl<R, Repo> ListContentUseCase<R> for ContentService<R, Repo>
where
    R: Resource,
    Repo: ContentReader<R>,
{
    async fn execute(&self, filter: &R::Filter) -> Result<Vec<R>, ListContentError> {
        self.repository.list(filter).await.map_err(|e| {
            error!(kind = %R::KIND, error = %e, "Failed to list records");
            ListContentError::QueryFailed(R::LABEL, e.to_string())
        })
    }
}
