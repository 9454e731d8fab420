use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;
use crate::modules::dashboard::application::domain::entities::DashboardStats;

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, ContentRepositoryError>;
}
