use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 'WORK' | 'ACTIVITY'
                    .col(ColumnDef::new(Experiences::Type).string_len(16).not_null())
                    .col(ColumnDef::new(Experiences::Role).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(ColumnDef::new(Experiences::StartDate).text())
                    .col(ColumnDef::new(Experiences::EndDate).text())
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(ColumnDef::new(Experiences::Traits).json().not_null())
                    .col(
                        ColumnDef::new(Experiences::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_order
                ON experiences ("order");
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_experiences_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Type,
    Role,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
    Traits,
    Order,
}
