use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::{from_json, map_db_err, to_json};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError, ContentWriter,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    self as projects, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectFilter,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Project> for ProjectRepositorySqlite {
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, ContentRepositoryError> {
        let mut query = Entity::find();

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        query = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }
}

#[async_trait]
impl ContentWriter<Project> for ProjectRepositorySqlite {
    async fn insert(&self, draft: ProjectDraft) -> Result<Project, ContentRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        apply_draft(&mut model, draft)?;
        model.created_at = Set(Utc::now());

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
impl ContentEditor<Project> for ProjectRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: ProjectDraft,
    ) -> Result<Option<Project>, ContentRepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        // created_at stays as inserted
        let mut model: ActiveModel = existing.into();
        apply_draft(&mut model, draft)?;

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(updated).map(Some)
    }
}

#[async_trait]
impl ProjectQuery for ProjectRepositorySqlite {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ContentRepositoryError> {
        Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .transpose()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_draft(model: &mut ActiveModel, draft: ProjectDraft) -> Result<(), ContentRepositoryError> {
    model.title = Set(draft.title);
    model.slug = Set(draft.slug);
    model.brief = Set(draft.brief);
    model.content = Set(draft.content);
    model.tech_stack = Set(to_json(&draft.tech_stack)?);
    model.repo_url = Set(draft.repo_url);
    model.demo_url = Set(draft.demo_url);
    model.thumbnail_url = Set(draft.thumbnail_url);
    model.featured = Set(draft.featured);
    Ok(())
}

fn model_to_domain(model: projects::Model) -> Result<Project, ContentRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        slug: model.slug,
        brief: model.brief,
        content: model.content,
        tech_stack: from_json(&model.tech_stack)?,
        repo_url: model.repo_url,
        demo_url: model.demo_url,
        thumbnail_url: model.thumbnail_url,
        featured: model.featured,
        created_at: model.created_at,
    })
}

// ============================================================================
// Tests
// ============================================================================
