use serde::{Deserialize, Serialize};

/// Category entity as the service layer sees it.
///
/// `id` is `None` until the record has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Category create/update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub category_code: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Category as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Option<i64>,
    pub category_code: String,
    pub category_name: String,
    pub description: Option<String>,
}

impl CategoryRequest {
    pub fn to_entity(&self) -> Category {
        Category {
            id: self.id,
            code: self.category_code.clone(),
            name: self.category_name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Category {
    pub fn to_response(&self) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            category_code: self.code.clone(),
            category_name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        CategoryResponse { id: c.id, category_code: c.code, category_name: c.name, description: c.description }
    }
}
