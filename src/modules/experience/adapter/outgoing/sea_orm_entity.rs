use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // 'WORK' | 'ACTIVITY'
    #[sea_orm(column_name = "type")]
    pub kind: String,

    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// JSON array of strings
    #[sea_orm(column_type = "Json")]
    pub traits: Json,

    #[sea_orm(column_name = "order")]
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
