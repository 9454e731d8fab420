use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profile::FullName).text().not_null())
                    .col(ColumnDef::new(Profile::Headline).text())
                    .col(ColumnDef::new(Profile::Email).text().not_null())
                    .col(ColumnDef::new(Profile::Phone).text())
                    .col(ColumnDef::new(Profile::Location).text())
                    .col(ColumnDef::new(Profile::GithubUrl).text())
                    .col(ColumnDef::new(Profile::LinkedinUrl).text())
                    .col(ColumnDef::new(Profile::Bio).text())
                    .col(ColumnDef::new(Profile::AvatarUrl).text())
                    .col(ColumnDef::new(Profile::ResumeUrl).text())
                    .col(
                        ColumnDef::new(Profile::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    FullName,
    Headline,
    Email,
    Phone,
    Location,
    GithubUrl,
    LinkedinUrl,
    Bio,
    AvatarUrl,
    ResumeUrl,
    IsAvailable,
}
