use async_trait::async_trait;
use common::pagination::{Page, PageRequest};

use super::domain::Product;
use crate::errors::InventoryError;
use crate::sort::Sort;

/// Persistence gateway for products. Saved products carry their category links.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products whose code or description contains `keyword` (case-sensitive), one page in `sort` order.
    async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Product>, InventoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, InventoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, InventoryError>;
    /// Overwrite when `id` names a row, otherwise insert under a fresh id; category links are replaced.
    async fn save(&self, product: Product) -> Result<Product, InventoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), InventoryError>;
    /// Unknown ids are ignored.
    async fn delete_all_by_ids(&self, ids: &[i64]) -> Result<(), InventoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, InventoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;

    use crate::sort::{SortDirection, SortField};

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Product>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<Rows>,
    }

    impl MockProductRepository {
        fn rows(&self) -> Result<MutexGuard<'_, Rows>, InventoryError> {
            self.rows.lock().map_err(InventoryError::persistence)
        }
    }

    fn compare(a: &Product, b: &Product, sort: Sort) -> Ordering {
        let ord = match sort.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Code => a.code.cmp(&b.code),
            SortField::Name => a.description.cmp(&b.description),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Product>, InventoryError> {
            let rows = self.rows()?;
            let mut matched: Vec<Product> = rows
                .by_id
                .values()
                .filter(|p| p.code.contains(keyword) || p.description.contains(keyword))
                .cloned()
                .collect();
            matched.sort_by(|a, b| compare(a, b, sort));
            Ok(Page::from_slice(matched, page))
        }

        async fn find_by_code(&self, code: &str) -> Result<Option<Product>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.values().find(|p| p.code == code).cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.get(&id).cloned())
        }

        async fn save(&self, mut product: Product) -> Result<Product, InventoryError> {
            let mut rows = self.rows()?;
            let clash = rows
                .by_id
                .values()
                .any(|p| p.code == product.code && p.id != product.id);
            if clash {
                return Err(InventoryError::persistence(format!("duplicate product code {}", product.code)));
            }
            let id = match product.id {
                Some(id) if rows.by_id.contains_key(&id) => id,
                _ => {
                    rows.last_id += 1;
                    rows.last_id
                }
            };
            product.id = Some(id);
            product.created_at = rows
                .by_id
                .get(&id)
                .and_then(|p| p.created_at)
                .or_else(|| Some(Utc::now()));
            if product.categories.is_none() {
                product.categories = Some(Default::default());
            }
            rows.by_id.insert(id, product.clone());
            Ok(product)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), InventoryError> {
            let mut rows = self.rows()?;
            rows.by_id.remove(&id);
            Ok(())
        }

        async fn delete_all_by_ids(&self, ids: &[i64]) -> Result<(), InventoryError> {
            let mut rows = self.rows()?;
            for id in ids {
                rows.by_id.remove(id);
            }
            Ok(())
        }

        async fn find_all(&self) -> Result<Vec<Product>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.values().cloned().collect())
        }
    }
}
