use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use common::pagination::{Page, PageRequest};
use models::{category, product, product_category};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::debug;

use crate::category::domain::Category;
use crate::category::repo::seaorm::order;
use crate::errors::InventoryError;
use crate::product::domain::Product;
use crate::product::repository::ProductRepository;
use crate::sort::{Sort, SortField};

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Attach linked categories to each row, preserving row order.
    async fn with_categories(&self, rows: Vec<product::Model>) -> Result<Vec<Product>, InventoryError> {
        let ids = rows.iter().map(|p| p.id).collect();
        let mut links = product_category::categories_for(&self.db, ids).await?;
        Ok(rows
            .into_iter()
            .map(|m| {
                let cats = links.remove(&m.id).unwrap_or_default();
                to_domain(m, cats)
            })
            .collect())
    }
}

fn to_domain(m: product::Model, categories: Vec<category::Model>) -> Product {
    Product {
        id: Some(m.id),
        code: m.code,
        description: m.description,
        quantity: Some(m.quantity),
        buying_price: Some(m.buying_price),
        selling_price: Some(m.selling_price),
        created_at: Some(m.created_at.with_timezone(&Utc)),
        categories: Some(categories.into_iter().map(Category::from).collect()),
    }
}

fn column(field: SortField) -> product::Column {
    match field {
        SortField::Id => product::Column::Id,
        SortField::Code => product::Column::Code,
        SortField::Name => product::Column::Description,
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Product>, InventoryError> {
        let (rows, total) = product::search(&self.db, keyword, column(sort.field), order(sort.direction), page.page, page.size).await?;
        Ok(Page::new(self.with_categories(rows).await?, page, total))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, InventoryError> {
        let found = product::find_by_code(&self.db, code).await?;
        Ok(self.with_categories(found.into_iter().collect()).await?.pop())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, InventoryError> {
        let found = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InventoryError::persistence)?;
        Ok(self.with_categories(found.into_iter().collect()).await?.pop())
    }

    /// Row and links are written in one transaction.
    async fn save(&self, p: Product) -> Result<Product, InventoryError> {
        let category_ids = p.category_ids();
        let fields = product::ProductFields {
            code: p.code,
            description: p.description,
            quantity: p.quantity.unwrap_or_default(),
            buying_price: p.buying_price.unwrap_or_default(),
            selling_price: p.selling_price.unwrap_or_default(),
        };
        let txn = self.db.begin().await.map_err(InventoryError::persistence)?;
        let saved = product::save(&txn, p.id, fields).await?;
        product_category::replace_links(&txn, saved.id, category_ids).await?;
        txn.commit().await.map_err(InventoryError::persistence)?;
        debug!(id = saved.id, "product row and links committed");

        let mut links: HashMap<i64, Vec<category::Model>> = product_category::categories_for(&self.db, vec![saved.id]).await?;
        let cats = links.remove(&saved.id).unwrap_or_default();
        Ok(to_domain(saved, cats))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), InventoryError> {
        product::delete_many(&self.db, vec![id]).await?;
        Ok(())
    }

    async fn delete_all_by_ids(&self, ids: &[i64]) -> Result<(), InventoryError> {
        product::delete_many(&self.db, ids.to_vec()).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, InventoryError> {
        let all = product::Entity::find()
            .all(&self.db)
            .await
            .map_err(InventoryError::persistence)?;
        self.with_categories(all).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::category::repo::seaorm::SeaOrmCategoryRepository;
    use crate::category::repository::CategoryRepository;
    use crate::errors::ErrorCode;
    use crate::product::ProductService;
    use crate::sort::SortBy;
    use crate::test_support::{get_db, unique};

    #[tokio::test]
    async fn product_with_categories_against_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let svc = ProductService::new(Arc::new(SeaOrmProductRepository::new(db)), Arc::clone(&categories));

        let cat = categories
            .save(Category { code: unique("svc-pc"), name: "Linked".into(), ..Default::default() })
            .await?;
        let code = unique("svc-p");
        let created = svc
            .create(Product {
                code: code.clone(),
                description: "Integration widget".into(),
                quantity: Some(2),
                buying_price: Some(1.0),
                selling_price: Some(2.0),
                categories: Some([Category { id: cat.id, ..Default::default() }].into_iter().collect()),
                ..Default::default()
            })
            .await?;
        assert_eq!(created.categories.len(), 1);
        assert_eq!(created.categories[0].category_name, "Linked");

        let page = svc.list(&code, 0, 5, SortBy::ProductCodeDesc).await?;
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].categories.len(), 1);

        svc.delete(created.id).await?;
        assert_eq!(svc.get(created.id).await.unwrap_err().code, ErrorCode::ProductNotFound);
        categories.delete_by_id(cat.id.unwrap_or_default()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_links_against_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let svc = ProductService::new(Arc::new(SeaOrmProductRepository::new(db)), Arc::clone(&categories));

        let a = categories.save(Category { code: unique("svc-pa"), name: "First".into(), ..Default::default() }).await?;
        let b = categories.save(Category { code: unique("svc-pb"), name: "Second".into(), ..Default::default() }).await?;
        let base = Product {
            code: unique("svc-pu"),
            description: "100%_literal".into(),
            quantity: Some(1),
            buying_price: Some(1.0),
            selling_price: Some(2.0),
            ..Default::default()
        };
        let created = svc
            .create(Product { categories: Some([Category { id: a.id, ..Default::default() }].into_iter().collect()), ..base.clone() })
            .await?;
        let updated = svc
            .update(Product {
                id: created.id,
                quantity: Some(4),
                categories: Some([Category { id: b.id, ..Default::default() }].into_iter().collect()),
                ..base.clone()
            })
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.quantity, Some(4));
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.categories.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b.id]);

        let page = svc.list(&base.code, 0, 5, SortBy::ProductNameAsc).await?;
        assert_eq!(page.total_elements, 1);
        let page = svc.list("0%_l", 0, 5, SortBy::ProductNameAsc).await?;
        assert!(page.content.iter().any(|p| p.id == created.id));

        svc.delete(created.id).await?;
        categories.delete_all_by_ids(&[a.id.unwrap_or_default(), b.id.unwrap_or_default()]).await?;
        Ok(())
    }
}
