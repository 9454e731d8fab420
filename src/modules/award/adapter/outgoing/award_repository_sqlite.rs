use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::award::adapter::outgoing::sea_orm_entity::{
    self as awards, ActiveModel, Column, Entity,
};
use crate::modules::award::application::domain::entities::{Award, AwardDraft, AwardFilter};
use crate::modules::content::adapter::outgoing::sea_orm_support::map_db_err;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentRepositoryError, ContentWriter,
};

#[derive(Clone)]
pub struct AwardRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl AwardRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Award> for AwardRepositorySqlite {
    async fn list(&self, filter: &AwardFilter) -> Result<Vec<Award>, ContentRepositoryError> {
        let mut query = Entity::find();

        if let Some(kind) = filter.kind {
            query = query.filter(Column::Kind.eq(kind.as_str()));
        }

        query
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
impl ContentWriter<Award> for AwardRepositorySqlite {
    async fn insert(&self, draft: AwardDraft) -> Result<Award, ContentRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        apply_draft(&mut model, draft);

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
impl ContentEditor<Award> for AwardRepositorySqlite {
    async fn update(
        &self,
        id: i32,
        draft: AwardDraft,
    ) -> Result<Option<Award>, ContentRepositoryError> {
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
        model_to_domain(updated).map(Some)
    }
}

fn apply_draft(model: &mut ActiveModel, draft: AwardDraft) {
    model.title = Set(draft.title);
    model.issuer = Set(draft.issuer);
    model.date = Set(draft.date);
    model.url = Set(draft.url);
    model.kind = Set(draft.kind.as_str().to_string());
}

fn model_to_domain(model: awards::Model) -> Result<Award, ContentRepositoryError> {
    Ok(Award {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        date: model.date,
        url: model.url,
        kind: model
            .kind
            .parse()
            .map_err(ContentRepositoryError::SerializationError)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::award::application::domain::entities::AwardKind;
    use crate::tests::support::db::migrated_sqlite;

    fn draft(title: &str, kind: AwardKind) -> AwardDraft {
        AwardDraft {
            title: title.to_string(),
            issuer: Some("Issuer".to_string()),
            date: None,
            url: None,
            kind,
        }
    }

    #[tokio::test]
    async fn test_filter_by_type() {
        let repo = AwardRepositorySqlite::new(migrated_sqlite().await);
        repo.insert(draft("Cert A", AwardKind::Certificate)).await.unwrap();
        repo.insert(draft("Prize", AwardKind::Award)).await.unwrap();
        repo.insert(draft("Cert B", AwardKind::Certificate)).await.unwrap();

        let certificates = repo
            .list(&AwardFilter {
                kind: Some(AwardKind::Certificate),
            })
            .await
            .unwrap();
        let titles: Vec<&str> = certificates.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Cert A", "Cert B"]);

        assert_eq!(repo.list(&AwardFilter::default()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_changes_type() {
        let repo = AwardRepositorySqlite::new(migrated_sqlite().await);
        let created = repo.insert(draft("Prize", AwardKind::Certificate)).await.unwrap();

        let updated = repo
            .update(created.id, draft("Prize", AwardKind::Award))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.kind, AwardKind::Award);
        assert!(repo.update(created.id + 100, draft("X", AwardKind::Award)).await.unwrap().is_none());
    }
}
