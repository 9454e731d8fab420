use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Slug).text().not_null())
                    .col(ColumnDef::new(Projects::Brief).text())
                    .col(ColumnDef::new(Projects::Content).text())
                    .col(ColumnDef::new(Projects::TechStack).json().not_null())
                    .col(ColumnDef::new(Projects::RepoUrl).text())
                    .col(ColumnDef::new(Projects::DemoUrl).text())
                    .col(ColumnDef::new(Projects::ThumbnailUrl).text())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Slugs address the public project page, so they are unique table-wide
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_projects_slug_unique
                ON projects (slug);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured
                ON projects (featured);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_slug_unique;
                DROP INDEX IF EXISTS idx_projects_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    Brief,
    Content,
    TechStack,
    RepoUrl,
    DemoUrl,
    ThumbnailUrl,
    Featured,
    CreatedAt,
}
