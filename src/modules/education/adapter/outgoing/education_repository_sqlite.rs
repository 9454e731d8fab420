use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::map_db_err;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError, ContentWriter,
};
use crate::modules::education::adapter::outgoing::sea_orm_entity::{
    self as education, ActiveModel, Column, Entity,
};
use crate::modules::education::application::domain::entities::{Education, EducationDraft};

#[derive(Clone)]
pub struct EducationRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Education> for EducationRepositorySqlite {
    async fn list(&self, _filter: &()) -> Result<Vec<Education>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Education::from).collect())
    }
}

#[async_trait]
impl ContentWriter<Education> for EducationRepositorySqlite {
    async fn insert(&self, draft: EducationDraft) -> Result<Education, ContentRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        apply_draft(&mut model, draft);

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(created.into())
    }

    async fn delete(&self, id: i32) -> Result<u64, ContentRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl ContentEditor<Education> for EducationRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: EducationDraft,
    ) -> Result<Option<Education>, ContentRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        apply_draft(&mut model, draft);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.into()))
    }
}

fn apply_draft(model: &mut ActiveModel, draft: EducationDraft) {
    model.school = Set(draft.school);
    model.degree = Set(draft.degree);
    model.gpa = Set(draft.gpa);
    model.start_date = Set(draft.start_date);
    model.end_date = Set(draft.end_date);
    model.achievements = Set(draft.achievements);
}

impl From<education::Model> for Education {
    fn from(model: education::Model) -> Self {
        Self {
            id: model.id,
            school: model.school,
            degree: model.degree,
            gpa: model.gpa,
            start_date: model.start_date,
            end_date: model.end_date,
            achievements: model.achievements,
        }
    }
}
