use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::award::adapter::outgoing::sea_orm_entity as awards;
use crate::modules::content::adapter::outgoing::sea_orm_support::map_db_err;
use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;
use crate::modules::dashboard::application::domain::entities::DashboardStats;
use crate::modules::dashboard::application::ports::outgoing::dashboard_query::DashboardQuery;
use crate::modules::education::adapter::outgoing::sea_orm_entity as education;
use crate::modules::experience::adapter::outgoing::sea_orm_entity as experiences;
use crate::modules::message::adapter::outgoing::sea_orm_entity as messages;
use crate::modules::project::adapter::outgoing::sea_orm_entity as projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity as skills;

#[derive(Clone)]
pub struct DashboardQuerySqlite {
    db: Arc<DatabaseConnection>,
}

impl DashboardQuerySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DashboardQuery for DashboardQuerySqlite {
    async fn stats(&self) -> Result<DashboardStats, ContentRepositoryError> {
        let db = &*self.db;

        Ok(DashboardStats {
            projects: projects::Entity::find().count(db).await.map_err(map_db_err)?,
            experiences: experiences::Entity::find()
                .count(db)
                .await
                .map_err(map_db_err)?,
            education: education::Entity::find().count(db).await.map_err(map_db_err)?,
            skills: skills::Entity::find().count(db).await.map_err(map_db_err)?,
            awards: awards::Entity::find().count(db).await.map_err(map_db_err)?,
            messages: messages::Entity::find().count(db).await.map_err(map_db_err)?,
            unread: messages::Entity::find()
                .filter(messages::Column::IsRead.eq(false))
                .count(db)
                .await
                .map_err(map_db_err)?,
        })
    }
}
