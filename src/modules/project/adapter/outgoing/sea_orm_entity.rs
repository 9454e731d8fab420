use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub brief: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,

    /// JSON array of strings
    #[sea_orm(column_type = "Json")]
    pub tech_stack: Json,

    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,

    /// Set once at insert
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
