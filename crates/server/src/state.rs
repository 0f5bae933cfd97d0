use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::category::repo::seaorm::SeaOrmCategoryRepository;
use service::category::repository::{mock::MockCategoryRepository, CategoryRepository};
use service::category::CategoryService;
use service::product::repo::seaorm::SeaOrmProductRepository;
use service::product::repository::{mock::MockProductRepository, ProductRepository};
use service::product::ProductService;

pub type Categories = CategoryService<dyn CategoryRepository>;
pub type Products = ProductService<dyn ProductRepository, dyn CategoryRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<Categories>,
    pub products: Arc<Products>,
}

impl ServerState {
    pub fn new(categories: Arc<dyn CategoryRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&categories))),
            products: Arc::new(ProductService::new(products, categories)),
        }
    }

    /// Postgres-backed repositories sharing one pool
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            Arc::new(SeaOrmProductRepository::new(db)),
        )
    }

    /// In-memory repositories, used by router tests
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MockCategoryRepository::default()),
            Arc::new(MockProductRepository::default()),
        )
    }
}
