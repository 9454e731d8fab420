use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Awards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Awards::Title).text().not_null())
                    .col(ColumnDef::new(Awards::Issuer).text())
                    .col(ColumnDef::new(Awards::Date).text())
                    .col(ColumnDef::new(Awards::Url).text())
                    // 'CERTIFICATE' | 'AWARD'
                    .col(ColumnDef::new(Awards::Type).string_len(16).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Awards {
    Table,
    Id,
    Title,
    Issuer,
    Date,
    Url,
    Type,
}
