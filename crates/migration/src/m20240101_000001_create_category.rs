//! Create `category` table.
//! Codes are unique; descriptions are optional free text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(big_integer(Category::Id).primary_key().auto_increment())
                    .col(string_len(Category::CategoryCode, 64).not_null().unique_key())
                    .col(string_len(Category::CategoryName, 255).not_null())
                    .col(
                        ColumnDef::new(Category::Description)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Category::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    CategoryCode,
    CategoryName,
    Description,
}
