use std::sync::Arc;

use common::pagination::{Page, PageRequest};
use common::types::DeleteResponse;
use tracing::{debug, info, instrument};

use super::domain::{Category, CategoryResponse};
use super::repository::CategoryRepository;
use super::validator;
use crate::errors::{ErrorCode, InventoryError};
use crate::sort::SortBy;

pub const CATEGORY_DELETED: &str = "Category deleted successfully :)";
pub const CATEGORIES_DELETED: &str = "Selected categories deleted successfully :)";

/// Category business service independent of web framework
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Keyword search with one of the category sort orders.
    ///
    /// # Examples
    /// ```
    /// use service::category::{CategoryService, Category, repository::mock::MockCategoryRepository};
    /// use service::sort::SortBy;
    /// use std::sync::Arc;
    /// let svc = CategoryService::new(Arc::new(MockCategoryRepository::default()));
    /// for (code, name) in [("C1", "Cables"), ("C2", "Adapters")] {
    ///     let c = Category { code: code.into(), name: name.into(), ..Default::default() };
    ///     tokio_test::block_on(svc.create(c)).unwrap();
    /// }
    /// let page = tokio_test::block_on(svc.list("", 0, 10, SortBy::CategoryNameAsc)).unwrap();
    /// assert_eq!(page.total_elements, 2);
    /// assert_eq!(page.content[0].category_name, "Adapters");
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self, keyword: &str, page: u64, size: u64, sort_by: SortBy) -> Result<Page<CategoryResponse>, InventoryError> {
        let request = PageRequest::of(page, size).normalize();
        let sort = sort_by.for_categories();
        debug!(?sort, "category sort resolved");
        let found = self.repo.find_page_by_keyword(keyword, request, sort).await?;
        Ok(found.map(CategoryResponse::from))
    }

    #[instrument(skip(self, category), fields(code = %category.code))]
    pub async fn create(&self, category: Category) -> Result<CategoryResponse, InventoryError> {
        let errors = validator::validate(&category);
        if !errors.is_empty() {
            return Err(InventoryError::with_errors("Category is not valid", ErrorCode::CategoryNotValid, errors));
        }
        if self.repo.find_by_code(&category.code).await?.is_some() {
            return Err(InventoryError::new(
                format!("this code={} is used with another category, it should be unique!", category.code),
                ErrorCode::CategoryAlreadyInUse,
            ));
        }
        let saved = self.repo.save(category).await?;
        info!(id = ?saved.id, code = %saved.code, "category_created");
        Ok(saved.into())
    }

    pub async fn get(&self, id: Option<i64>) -> Result<CategoryResponse, InventoryError> {
        let id = id.ok_or_else(InventoryError::null_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(CategoryResponse::from)
            .ok_or_else(|| InventoryError::new(format!("Category with ID={id} Not Found"), ErrorCode::CategoryNotFound))
    }

    /// Re-validates and saves; the code is not re-checked for uniqueness.
    #[instrument(skip(self, category), fields(id = ?category.id))]
    pub async fn update(&self, category: Category) -> Result<CategoryResponse, InventoryError> {
        let errors = validator::validate(&category);
        if !errors.is_empty() {
            return Err(InventoryError::with_errors("Category is not valid", ErrorCode::CategoryNotValid, errors));
        }
        let saved = self.repo.save(category).await?;
        info!(id = ?saved.id, "category_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<i64>) -> Result<DeleteResponse, InventoryError> {
        let id = id.ok_or_else(InventoryError::null_id)?;
        self.repo.delete_by_id(id).await?;
        info!(id, "category_deleted");
        Ok(DeleteResponse::new(CATEGORY_DELETED))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_all(&self, ids: &[i64]) -> Result<DeleteResponse, InventoryError> {
        self.repo.delete_all_by_ids(ids).await?;
        info!("categories_deleted");
        Ok(DeleteResponse::new(CATEGORIES_DELETED))
    }

    /// Every category, unpaginated; feeds selection dropdowns.
    pub async fn get_all(&self) -> Result<Vec<CategoryResponse>, InventoryError> {
        let all = self.repo.find_all().await?;
        Ok(all.into_iter().map(CategoryResponse::from).collect())
    }
}
