use std::collections::HashSet;
use std::sync::Arc;

use common::pagination::{Page, PageRequest};
use common::types::DeleteResponse;
use tracing::{debug, info, instrument, warn};

use super::domain::{Product, ProductResponse};
use super::repository::ProductRepository;
use super::validator;
use crate::category::repository::CategoryRepository;
use crate::errors::{ErrorCode, InventoryError};
use crate::sort::SortBy;

pub const PRODUCT_DELETED: &str = "Product deleted successfully :)";
pub const PRODUCTS_DELETED: &str = "Selected products deleted successfully :)";

/// Product business service; category references are resolved through the category repository.
pub struct ProductService<P: ProductRepository + ?Sized, C: CategoryRepository + ?Sized> {
    repo: Arc<P>,
    categories: Arc<C>,
}

impl<P: ProductRepository + ?Sized, C: CategoryRepository + ?Sized> ProductService<P, C> {
    pub fn new(repo: Arc<P>, categories: Arc<C>) -> Self { Self { repo, categories } }

    #[instrument(skip(self))]
    pub async fn list(&self, keyword: &str, page: u64, size: u64, sort_by: SortBy) -> Result<Page<ProductResponse>, InventoryError> {
        let request = PageRequest::of(page, size).normalize();
        let sort = sort_by.for_products();
        debug!(?sort, "product sort resolved");
        let found = self.repo.find_page_by_keyword(keyword, request, sort).await?;
        Ok(found.map(ProductResponse::from))
    }

    #[instrument(skip(self, product), fields(code = %product.code))]
    pub async fn create(&self, mut product: Product) -> Result<ProductResponse, InventoryError> {
        Self::check(&product)?;
        if self.repo.find_by_code(&product.code).await?.is_some() {
            return Err(InventoryError::new(
                format!("this code={} is used with another product, it should be unique!", product.code),
                ErrorCode::ProductAlreadyInUse,
            ));
        }
        self.resolve_categories(&mut product).await?;
        let saved = self.repo.save(product).await?;
        info!(id = ?saved.id, code = %saved.code, "product_created");
        Ok(saved.into())
    }

    pub async fn get(&self, id: Option<i64>) -> Result<ProductResponse, InventoryError> {
        let id = id.ok_or_else(InventoryError::null_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| InventoryError::new(format!("Product with ID={id} Not Found"), ErrorCode::ProductNotFound))
    }

    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn update(&self, mut product: Product) -> Result<ProductResponse, InventoryError> {
        Self::check(&product)?;
        self.resolve_categories(&mut product).await?;
        let saved = self.repo.save(product).await?;
        info!(id = ?saved.id, "product_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Option<i64>) -> Result<DeleteResponse, InventoryError> {
        let id = id.ok_or_else(InventoryError::null_id)?;
        self.repo.delete_by_id(id).await?;
        info!(id, "product_deleted");
        Ok(DeleteResponse::new(PRODUCT_DELETED))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_all(&self, ids: &[i64]) -> Result<DeleteResponse, InventoryError> {
        self.repo.delete_all_by_ids(ids).await?;
        info!("products_deleted");
        Ok(DeleteResponse::new(PRODUCTS_DELETED))
    }

    pub async fn get_all(&self) -> Result<Vec<ProductResponse>, InventoryError> {
        let all = self.repo.find_all().await?;
        Ok(all.into_iter().map(ProductResponse::from).collect())
    }

    fn check(product: &Product) -> Result<(), InventoryError> {
        let errors = validator::validate(product);
        if errors.is_empty() {
            return Ok(());
        }
        Err(InventoryError::with_errors("Product is not valid", ErrorCode::ProductNotValid, errors))
    }

    /// Swap each category reference for the stored record.
    async fn resolve_categories(&self, product: &mut Product) -> Result<(), InventoryError> {
        if product.categories.is_none() {
            return Ok(());
        }
        let mut resolved = HashSet::new();
        for id in product.category_ids() {
            match self.categories.find_by_id(id).await? {
                Some(c) => { resolved.insert(c); }
                None => {
                    warn!(category_id = id, "product references unknown category");
                    return Err(InventoryError::new(format!("Category with ID={id} Not Found"), ErrorCode::CategoryNotFound));
                }
            }
        }
        product.categories = Some(resolved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::repository::mock::MockCategoryRepository;
    use crate::category::Category;
    use crate::product::repository::mock::MockProductRepository;

    struct Fixture {
        svc: ProductService<MockProductRepository, MockCategoryRepository>,
        categories: Arc<MockCategoryRepository>,
    }

    fn fixture() -> Fixture {
        let categories = Arc::new(MockCategoryRepository::default());
        let svc = ProductService::new(Arc::new(MockProductRepository::default()), Arc::clone(&categories));
        Fixture { svc, categories }
    }

    fn product(code: &str, description: &str) -> Product {
        Product {
            code: code.into(),
            description: description.into(),
            quantity: Some(1),
            buying_price: Some(2.0),
            selling_price: Some(3.0),
            ..Default::default()
        }
    }

    fn reference(id: i64) -> Category {
        Category { id: Some(id), ..Default::default() }
    }

    #[tokio::test]
    async fn create_invalid_product_lists_violations() {
        let err = fixture().svc.create(Product::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotValid);
        assert_eq!(err.errors.len(), 5);
    }

    #[tokio::test]
    async fn duplicate_code_is_already_in_use() {
        let f = fixture();
        f.svc.create(product("P1", "Hammer")).await.unwrap();
        let err = f.svc.create(product("P1", "Other")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductAlreadyInUse);
    }

    #[tokio::test]
    async fn category_references_are_resolved() {
        let f = fixture();
        let tools = f.categories.save(Category { code: "T".into(), name: "Tools".into(), ..Default::default() }).await.unwrap();
        let p = Product { categories: Some([reference(tools.id.unwrap())].into_iter().collect()), ..product("P1", "Hammer") };
        let created = f.svc.create(p).await.unwrap();
        assert_eq!(created.categories.len(), 1);
        assert_eq!(created.categories[0].category_name, "Tools");
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn unknown_category_reference_is_not_found() {
        let f = fixture();
        let p = Product { categories: Some([reference(77)].into_iter().collect()), ..product("P1", "Hammer") };
        let err = f.svc.create(p).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert!(f.svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_checks_id_and_existence() {
        let f = fixture();
        assert_eq!(f.svc.get(None).await.unwrap_err().code, ErrorCode::NullId);
        assert_eq!(f.svc.get(Some(999)).await.unwrap_err().code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn keyword_matches_code_or_description() {
        let f = fixture();
        for (code, desc) in [("P1", "Hammer"), ("saw-2", "Hand saw"), ("P3", "Drill")] {
            f.svc.create(product(code, desc)).await.unwrap();
        }
        let page = f.svc.list("saw", 0, 10, SortBy::ProductNameAsc).await.unwrap();
        assert_eq!(page.total_elements, 1);
        let page = f.svc.list("", 0, 10, SortBy::ProductNameAsc).await.unwrap();
        let names: Vec<_> = page.content.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Drill", "Hammer", "Hand saw"]);
        let page = f.svc.list("", 0, 10, SortBy::CategoryCodeAsc).await.unwrap();
        let ids: Vec<_> = page.content.iter().map(|p| p.id.unwrap()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_replaces_fields() {
        let f = fixture();
        let created = f.svc.create(product("P1", "Hammer")).await.unwrap();
        let updated = f.svc.update(Product { id: created.id, quantity: Some(9), ..product("P1", "Claw hammer") }).await.unwrap();
        assert_eq!(updated.quantity, Some(9));
        assert_eq!(updated.product_name, "Claw hammer");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_of_unknown_id_gets_a_fresh_id() {
        let f = fixture();
        let inserted = f.svc.update(Product { id: Some(500), ..product("P500", "Far") }).await.unwrap();
        assert_eq!(inserted.id, Some(1));
        let next = f.svc.create(product("P2", "Next")).await.unwrap();
        assert_eq!(next.id, Some(2));
    }

    #[tokio::test]
    async fn update_replaces_category_links() {
        let f = fixture();
        let a = f.categories.save(Category { code: "A".into(), name: "Alpha".into(), ..Default::default() }).await.unwrap();
        let b = f.categories.save(Category { code: "B".into(), name: "Beta".into(), ..Default::default() }).await.unwrap();
        let created = f.svc
            .create(Product { categories: Some([reference(a.id.unwrap())].into_iter().collect()), ..product("P1", "Hammer") })
            .await
            .unwrap();
        let updated = f.svc
            .update(Product {
                id: created.id,
                categories: Some([reference(b.id.unwrap())].into_iter().collect()),
                ..product("P1", "Hammer")
            })
            .await
            .unwrap();
        assert_eq!(updated.categories.iter().map(|c| c.category_name.as_str()).collect::<Vec<_>>(), vec!["Beta"]);
    }

    #[tokio::test]
    async fn deletes_single_and_bulk() {
        let f = fixture();
        for code in ["A", "B", "C"] {
            f.svc.create(product(code, "x")).await.unwrap();
        }
        assert_eq!(f.svc.delete(Some(1)).await.unwrap().message, PRODUCT_DELETED);
        assert_eq!(f.svc.get(Some(1)).await.unwrap_err().code, ErrorCode::ProductNotFound);
        assert_eq!(f.svc.delete(None).await.unwrap_err().code, ErrorCode::NullId);
        assert_eq!(f.svc.delete_all(&[2, 50]).await.unwrap().message, PRODUCTS_DELETED);
        let left: Vec<_> = f.svc.get_all().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(left, vec![Some(3)]);
    }
}
