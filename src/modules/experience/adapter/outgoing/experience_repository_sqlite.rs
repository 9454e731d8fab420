use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::{from_json, map_db_err, to_json};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError, ContentWriter,
};
use crate::modules::experience::adapter::outgoing::sea_orm_entity::{
    self as experiences, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceFilter,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Experience> for ExperienceRepositorySqlite {
    async fn list(
        &self,
        filter: &ExperienceFilter,
    ) -> Result<Vec<Experience>, ContentRepositoryError> {
        let mut query = Entity::find();

        if let Some(kind) = filter.kind {
            query = query.filter(Column::Kind.eq(kind.as_str()));
        }

        query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }
}

#[async_trait]
impl ContentWriter<Experience> for ExperienceRepositorySqlite {
    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, ContentRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        apply_draft(&mut model, draft)?;

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(created)
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
impl ContentEditor<Experience> for ExperienceRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: ExperienceDraft,
    ) -> Result<Option<Experience>, ContentRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        apply_draft(&mut model, draft)?;

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(updated).map(Some)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_draft(model: &mut ActiveModel, draft: ExperienceDraft) -> Result<(), ContentRepositoryError> {
    model.kind = Set(draft.kind.as_str().to_string());
    model.role = Set(draft.role);
    model.company = Set(draft.company);
    model.location = Set(draft.location);
    model.start_date = Set(draft.start_date);
    model.end_date = Set(draft.end_date);
    model.description = Set(draft.description);
    model.traits = Set(to_json(&draft.traits)?);
    model.sort_order = Set(draft.order);
    Ok(())
}

fn model_to_domain(model: experiences::Model) -> Result<Experience, ContentRepositoryError> {
    Ok(Experience {
        id: model.id,
        kind: model
            .kind
            .parse()
            .map_err(ContentRepositoryError::SerializationError)?,
        role: model.role,
        company: model.company,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        traits: from_json(&model.traits)?,
        order: model.sort_order,
    })
}

// ============================================================================
// Tests
// ============================================================================
