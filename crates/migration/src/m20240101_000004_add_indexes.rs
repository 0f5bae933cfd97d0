use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Category: name ordering for the sorted listings
        manager
            .create_index(
                Index::create()
                    .name("idx_category_name")
                    .table(Category::Table)
                    .col(Category::CategoryName)
                    .to_owned(),
            )
            .await?;

        // Product: description ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_product_description")
                    .table(Product::Table)
                    .col(Product::Description)
                    .to_owned(),
            )
            .await?;

        // ProductCategory: reverse lookup from category
        manager
            .create_index(
                Index::create()
                    .name("idx_product_category_category")
                    .table(ProductCategory::Table)
                    .col(ProductCategory::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_category_name").table(Category::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_description").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_category_category").table(ProductCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Category { Table, CategoryName }

#[derive(DeriveIden)]
enum Product { Table, Description }

#[derive(DeriveIden)]
enum ProductCategory { Table, CategoryId }
