use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub full_name: String,
    pub headline: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub is_available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
