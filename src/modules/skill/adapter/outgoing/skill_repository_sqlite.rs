use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::{from_json, map_db_err, to_json};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError, ContentWriter,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::{
    self as skills, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};

#[derive(Clone)]
pub struct SkillRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Skill> for SkillRepositorySqlite {
    async fn list(&self, _filter: &()) -> Result<Vec<Skill>, ContentRepositoryError> {
        Entity::find()
            .order_by_asc(Column::DisplayOrder)
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
impl ContentWriter<Skill> for SkillRepositorySqlite {
    async fn insert(&self, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
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
impl ContentEditor<Skill> for SkillRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: SkillDraft,
    ) -> Result<Option<Skill>, ContentRepositoryError> {
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

fn apply_draft(model: &mut ActiveModel, draft: SkillDraft) -> Result<(), ContentRepositoryError> {
    model.category = Set(draft.category);
    model.items = Set(to_json(&draft.items)?);
    model.display_order = Set(draft.display_order);
    Ok(())
}

fn model_to_domain(model: skills::Model) -> Result<Skill, ContentRepositoryError> {
    Ok(Skill {
        id: model.id,
        category: model.category,
        items: from_json(&model.items)?,
        display_order: model.display_order,
    })
}
