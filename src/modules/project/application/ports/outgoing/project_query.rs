use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;
use crate::modules::project::application::domain::entities::Project;

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ContentRepositoryError>;
}
