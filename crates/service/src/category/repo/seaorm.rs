use async_trait::async_trait;
use common::pagination::{Page, PageRequest};
use models::category;
use sea_orm::{DatabaseConnection, EntityTrait, Order};

use crate::category::domain::Category;
use crate::category::repository::CategoryRepository;
use crate::errors::InventoryError;
use crate::sort::{Sort, SortDirection, SortField};

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<category::Model> for Category {
    fn from(m: category::Model) -> Self {
        Category { id: Some(m.id), code: m.category_code, name: m.category_name, description: m.description }
    }
}

pub(crate) fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

fn column(field: SortField) -> category::Column {
    match field {
        SortField::Id => category::Column::Id,
        SortField::Code => category::Column::CategoryCode,
        SortField::Name => category::Column::CategoryName,
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_page_by_keyword(&self, keyword: &str, page: PageRequest, sort: Sort) -> Result<Page<Category>, InventoryError> {
        let (rows, total) = category::search(&self.db, keyword, column(sort.field), order(sort.direction), page.page, page.size).await?;
        Ok(Page::new(rows.into_iter().map(Category::from).collect(), page, total))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, InventoryError> {
        Ok(category::find_by_code(&self.db, code).await?.map(Category::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, InventoryError> {
        let found = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InventoryError::persistence)?;
        Ok(found.map(Category::from))
    }

    async fn save(&self, c: Category) -> Result<Category, InventoryError> {
        let saved = category::save(&self.db, c.id, &c.code, &c.name, c.description).await?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), InventoryError> {
        category::delete_many(&self.db, vec![id]).await?;
        Ok(())
    }

    async fn delete_all_by_ids(&self, ids: &[i64]) -> Result<(), InventoryError> {
        category::delete_many(&self.db, ids.to_vec()).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Category>, InventoryError> {
        let all = category::Entity::find()
            .all(&self.db)
            .await
            .map_err(InventoryError::persistence)?;
        Ok(all.into_iter().map(Category::from).collect())
    }
}
