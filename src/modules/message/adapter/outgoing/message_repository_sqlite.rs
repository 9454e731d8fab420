use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::content::adapter::outgoing::sea_orm_support::map_db_err;
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentReader, ContentRepositoryError, ContentWriter,
};
use crate::modules::message::adapter::outgoing::sea_orm_entity::{
    self as messages, ActiveModel, Column, Entity,
};
use crate::modules::message::application::domain::entities::{
    Message, MessageDraft, MessageFilter,
};
use crate::modules::message::application::ports::outgoing::message_status::MessageStatusRepository;

#[derive(Clone)]
pub struct MessageRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentReader<Message> for MessageRepositorySqlite {
    async fn list(&self, filter: &MessageFilter) -> Result<Vec<Message>, ContentRepositoryError> {
        let mut query = Entity::find();

        if filter.unread == Some(true) {
            query = query.filter(Column::IsRead.eq(false));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}

#[async_trait]
impl ContentWriter<Message> for MessageRepositorySqlite {
    async fn insert(&self, draft: MessageDraft) -> Result<Message, ContentRepositoryError> {
        let model = ActiveModel {
            name: Set(draft.name),
            email: Set(draft.email),
            subject: Set(draft.subject),
            message: Set(draft.message),
            is_read: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

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
impl MessageStatusRepository for MessageRepositorySqlite {
    async fn set_read(&self, id: i32, read: bool) -> Result<bool, ContentRepositoryError> {
        // SQLite counts matched rows, so re-marking still reports 1
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(read))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

impl From<messages::Model> for Message {
    fn from(model: messages::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::db::migrated_sqlite;

    fn draft(name: &str) -> MessageDraft {
        MessageDraft {
            name: name.to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Hi!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_message_is_unread() {
        let repo = MessageRepositorySqlite::new(migrated_sqlite().await);

        let created = repo.insert(draft("Sam")).await.unwrap();

        assert!(!created.is_read);
        assert_eq!(created.subject, None);
    }

    #[tokio::test]
    async fn test_set_read_is_idempotent() {
        let repo = MessageRepositorySqlite::new(migrated_sqlite().await);
        let created = repo.insert(draft("Sam")).await.unwrap();

        assert!(repo.set_read(created.id, true).await.unwrap());
        assert!(repo.set_read(created.id, true).await.unwrap());

        let rows = repo.list(&MessageFilter::default()).await.unwrap();
        assert!(rows[0].is_read);
    }

    #[tokio::test]
    async fn test_set_read_missing_id() {
        let repo = MessageRepositorySqlite::new(migrated_sqlite().await);

        assert!(!repo.set_read(404, true).await.unwrap());
    }

    #[tokio::test]
    async fn test_unread_filter_and_newest_first() {
        let repo = MessageRepositorySqlite::new(migrated_sqlite().await);
        let first = repo.insert(draft("First")).await.unwrap();
        let second = repo.insert(draft("Second")).await.unwrap();
        let third = repo.insert(draft("Third")).await.unwrap();
        repo.set_read(second.id, true).await.unwrap();

        let all = repo.list(&MessageFilter::default()).await.unwrap();
        let ids: Vec<i32> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);

        let unread = repo
            .list(&MessageFilter { unread: Some(true) })
            .await
            .unwrap();
        let ids: Vec<i32> = unread.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![third.id, first.id]);
    }
}
