//! Create `product` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(big_integer(Product::Id).primary_key().auto_increment())
                    .col(string_len(Product::Code, 64).not_null().unique_key())
                    .col(string_len(Product::Description, 512).not_null())
                    .col(integer(Product::Quantity).not_null())
                    .col(double(Product::BuyingPrice).not_null())
                    .col(double(Product::SellingPrice).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .check(Expr::col(Product::Quantity).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Code,
    Description,
    Quantity,
    BuyingPrice,
    SellingPrice,
    CreatedAt,
}
