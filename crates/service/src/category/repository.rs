use async_trait::async_trait;
use common::pagination::{Page, PageRequest};

use super::domain::Category;
use crate::errors::InventoryError;
use crate::sort::Sort;

/// Persistence gateway for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Categories whose code or name contains `keyword` (case-sensitive), one page in `sort` order.
    async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Category>, InventoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, InventoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, InventoryError>;
    /// Overwrite when `id` names a row, otherwise insert under a fresh id.
    async fn save(&self, category: Category) -> Result<Category, InventoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), InventoryError>;
    /// Unknown ids are ignored.
    async fn delete_all_by_ids(&self, ids: &[i64]) -> Result<(), InventoryError>;
    async fn find_all(&self) -> Result<Vec<Category>, InventoryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use crate::sort::{SortDirection, SortField};

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Category>,
        last_id: i64,
    }

    /// Keeps rows ordered by id and enforces code uniqueness like the unique index does.
    #[derive(Default)]
    pub struct MockCategoryRepository {
        rows: Mutex<Rows>,
    }

    impl MockCategoryRepository {
        fn rows(&self) -> Result<MutexGuard<'_, Rows>, InventoryError> {
            self.rows.lock().map_err(InventoryError::persistence)
        }
    }

    fn compare(a: &Category, b: &Category, sort: Sort) -> Ordering {
        let ord = match sort.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Code => a.code.cmp(&b.code),
            SortField::Name => a.name.cmp(&b.name),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Category>, InventoryError> {
            let rows = self.rows()?;
            let mut matched: Vec<Category> = rows
                .by_id
                .values()
                .filter(|c| c.code.contains(keyword) || c.name.contains(keyword))
                .cloned()
                .collect();
            matched.sort_by(|a, b| compare(a, b, sort));
            Ok(Page::from_slice(matched, page))
        }

        async fn find_by_code(&self, code: &str) -> Result<Option<Category>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.values().find(|c| c.code == code).cloned())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Category>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.get(&id).cloned())
        }

        async fn save(&self, mut category: Category) -> Result<Category, InventoryError> {
            let mut rows = self.rows()?;
            let clash = rows
                .by_id
                .values()
                .any(|c| c.code == category.code && c.id != category.id);
            if clash {
                return Err(InventoryError::persistence(format!("duplicate category_code {}", category.code)));
            }
            let id = match category.id {
                Some(id) if rows.by_id.contains_key(&id) => id,
                _ => {
                    rows.last_id += 1;
                    rows.last_id
                }
            };
            category.id = Some(id);
            rows.by_id.insert(id, category.clone());
            Ok(category)
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

        async fn find_all(&self) -> Result<Vec<Category>, InventoryError> {
            let rows = self.rows()?;
            Ok(rows.by_id.values().cloned().collect())
        }
    }
}
