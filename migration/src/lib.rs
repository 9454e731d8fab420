pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_profile;
mod m20260301_000002_create_table_experiences;
mod m20260301_000003_create_table_projects;
mod m20260301_000004_create_table_education;
mod m20260301_000005_create_table_skills;
mod m20260301_000006_create_table_awards;
mod m20260301_000007_create_table_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_profile::Migration),
            Box::new(m20260301_000002_create_table_experiences::Migration),
            Box::new(m20260301_000003_create_table_projects::Migration),
            Box::new(m20260301_000004_create_table_education::Migration),
            Box::new(m20260301_000005_create_table_skills::Migration),
            Box::new(m20260301_000006_create_table_awards::Migration),
            Box::new(m20260301_000007_create_table_messages::Migration),
        ]
    }
}
