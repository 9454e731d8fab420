use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub school: String,
    pub degree: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub achievements: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
