use async_trait::async_trait;

use crate::modules::dashboard::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError>;
}
