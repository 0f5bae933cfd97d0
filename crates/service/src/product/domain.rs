use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::domain::{Category, CategoryRequest, CategoryResponse};

/// Product entity as the service layer sees it.
///
/// Scalars are optional so an incomplete request can still be mapped and then
/// reported by the validator. `categories` is owned by the product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
    pub quantity: Option<i32>,
    pub buying_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub categories: Option<HashSet<Category>>,
}

/// Product create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub buying_price: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub categories: Option<HashSet<CategoryRequest>>,
}

/// Product as returned to callers; `product_name` carries the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub product_code: String,
    pub product_name: String,
    pub quantity: Option<i32>,
    pub buying_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryResponse>,
}

impl ProductRequest {
    /// `None` maps to `None`; a missing category set stays missing, an empty one stays empty.
    pub fn to_entity(request: Option<&ProductRequest>) -> Option<Product> {
        let request = request?;
        Some(Product {
            id: request.id,
            code: request.code.clone(),
            description: request.description.clone(),
            quantity: request.quantity,
            buying_price: request.buying_price,
            selling_price: request.selling_price,
            created_at: None,
            categories: request
                .categories
                .as_ref()
                .map(|set| set.iter().map(CategoryRequest::to_entity).collect()),
        })
    }
}

impl Product {
    /// Ids of the referenced categories, ascending.
    pub fn category_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .categories
            .iter()
            .flatten()
            .filter_map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn to_response(&self) -> ProductResponse {
        let mut categories: Vec<CategoryResponse> = self
            .categories
            .iter()
            .flatten()
            .map(Category::to_response)
            .collect();
        categories.sort_by_key(|c| c.id);
        ProductResponse {
            id: self.id,
            product_code: self.code.clone(),
            product_name: self.description.clone(),
            quantity: self.quantity,
            buying_price: self.buying_price,
            selling_price: self.selling_price,
            created_at: self.created_at,
            categories,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        p.to_response()
    }
}
