use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::map_db_err;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError,
};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    self as profile, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::{Profile, ProfileDraft};

#[derive(Clone)]
pub struct ProfileRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Profile> for ProfileRepositorySqlite {
    async fn list(&self, _filter: &()) -> Result<Vec<Profile>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }
}

#[async_trait]
impl ContentEditor<Profile> for ProfileRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: ProfileDraft,
    ) -> Result<Option<Profile>, ContentRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.full_name = Set(draft.full_name);
        model.headline = Set(draft.headline);
        model.email = Set(draft.email);
        model.phone = Set(draft.phone);
        model.location = Set(draft.location);
        model.github_url = Set(draft.github_url);
        model.linkedin_url = Set(draft.linkedin_url);
        model.bio = Set(draft.bio);
        model.avatar_url = Set(draft.avatar_url);
        model.resume_url = Set(draft.resume_url);
        model.is_available = Set(draft.is_available);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.into()))
    }
}

impl From<profile::Model> for Profile {
    fn from(model: profile::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            headline: model.headline,
            email: model.email,
            phone: model.phone,
            location: model.location,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            bio: model.bio,
            avatar_url: model.avatar_url,
            resume_url: model.resume_url,
            is_available: model.is_available,
        }
    }
}
