use async_trait::async_trait;
use tracing::error;

use crate::modules::dashboard::application::domain::entities::DashboardStats;
use crate::modules::dashboard::application::ports::incoming::get_dashboard::{
    GetDashboardError, GetDashboardUseCase,
};
use crate::modules::dashboard::application::ports::outgoing::dashboard_query::DashboardQuery;

pub struct GetDashboardService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
}

impl<Q> GetDashboardService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardUseCase for GetDashboardService<Q>
where
    Q: DashboardQuery,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError> {
        self.query.stats().await.map_err(|e| {
            error!("Failed to load dashboard stats: {}", e);
            GetDashboardError::QueryFailed(e.to_string())
        })
    }
}
