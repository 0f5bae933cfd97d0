use axum::{extract::{Path, Query, State}, Json};
use common::pagination::{Page, DEFAULT_PAGE_SIZE};
use common::types::DeleteResponse;
use serde::Deserialize;
use service::product::{ProductRequest, ProductResponse};
use service::sort::SortBy;

use crate::{errors::ApiError, metrics, state::ServerState};

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring matched against code or description; empty matches all
    #[serde(default)]
    pub keyword: String,
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    /// PRODUCT_CODE_ASC, PRODUCT_CODE_DESC, PRODUCT_NAME_ASC, PRODUCT_NAME_DESC; anything else sorts by id descending
    #[serde(default)]
    pub sort_by: Option<String>,
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    params(ListQuery),
    responses((status = 200, description = "Page of products"))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Page<ProductResponse>>, ApiError> {
    metrics::record("product", "list");
    let sort_by = q.sort_by.as_deref().map(SortBy::from_param).unwrap_or_default();
    let page = state.products.list(&q.keyword, q.page, q.size, sort_by).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/api/products/all", tag = "products",
    responses((status = 200, description = "Every product, unpaginated"))
)]
pub async fn get_all(State(state): State<ServerState>) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    metrics::record("product", "get_all");
    Ok(Json(state.products.get_all().await?))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductRequestDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "PRODUCT_NOT_VALID"),
        (status = 404, description = "CATEGORY_NOT_FOUND for an unknown category reference"),
        (status = 409, description = "PRODUCT_ALREADY_IN_USE")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ProductRequest>) -> Result<Json<ProductResponse>, ApiError> {
    metrics::record("product", "create");
    let product = ProductRequest::to_entity(Some(&input)).unwrap_or_default();
    Ok(Json(state.products.create(product).await?))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "PRODUCT_NOT_FOUND")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<ProductResponse>, ApiError> {
    metrics::record("product", "get");
    Ok(Json(state.products.get(Some(id)).await?))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::ProductRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "PRODUCT_NOT_VALID")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(input): Json<ProductRequest>) -> Result<Json<ProductResponse>, ApiError> {
    metrics::record("product", "update");
    let mut product = ProductRequest::to_entity(Some(&input)).unwrap_or_default();
    product.id = Some(id);
    Ok(Json(state.products.update(product).await?))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses((status = 200, description = "Deleted"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<DeleteResponse>, ApiError> {
    metrics::record("product", "delete");
    Ok(Json(state.products.delete(Some(id)).await?))
}

#[utoipa::path(
    delete, path = "/api/products", tag = "products",
    request_body = Vec<i64>,
    responses((status = 200, description = "Deleted; unknown ids are ignored"))
)]
pub async fn delete_all(State(state): State<ServerState>, Json(ids): Json<Vec<i64>>) -> Result<Json<DeleteResponse>, ApiError> {
    metrics::record("product", "delete_all");
    Ok(Json(state.products.delete_all(&ids).await?))
}
