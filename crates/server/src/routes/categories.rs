use axum::{extract::{Path, Query, State}, Json};
use common::pagination::{Page, DEFAULT_PAGE_SIZE};
use common::types::DeleteResponse;
use serde::Deserialize;
use service::category::{CategoryRequest, CategoryResponse};
use service::sort::SortBy;

use crate::{errors::ApiError, metrics, state::ServerState};

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring matched against code or name; empty matches all
    #[serde(default)]
    pub keyword: String,
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    /// CATEGORY_CODE_ASC, CATEGORY_CODE_DESC, CATEGORY_NAME_ASC, CATEGORY_NAME_DESC; anything else sorts by id descending
    #[serde(default)]
    pub sort_by: Option<String>,
}

#[utoipa::path(
    get, path = "/api/categories", tag = "categories",
    params(ListQuery),
    responses((status = 200, description = "Page of categories"))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Page<CategoryResponse>>, ApiError> {
    metrics::record("category", "list");
    let sort_by = q.sort_by.as_deref().map(SortBy::from_param).unwrap_or_default();
    let page = state.categories.list(&q.keyword, q.page, q.size, sort_by).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/api/categories/all", tag = "categories",
    responses((status = 200, description = "Every category, unpaginated"))
)]
pub async fn get_all(State(state): State<ServerState>) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    metrics::record("category", "get_all");
    Ok(Json(state.categories.get_all().await?))
}

#[utoipa::path(
    post, path = "/api/categories", tag = "categories",
    request_body = crate::openapi::CategoryRequestDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "CATEGORY_NOT_VALID"),
        (status = 409, description = "CATEGORY_ALREADY_IN_USE")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CategoryRequest>) -> Result<Json<CategoryResponse>, ApiError> {
    metrics::record("category", "create");
    Ok(Json(state.categories.create(input.to_entity()).await?))
}

#[utoipa::path(
    get, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "CATEGORY_NOT_FOUND")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<CategoryResponse>, ApiError> {
    metrics::record("category", "get");
    Ok(Json(state.categories.get(Some(id)).await?))
}

#[utoipa::path(
    put, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = crate::openapi::CategoryRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "CATEGORY_NOT_VALID")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(input): Json<CategoryRequest>) -> Result<Json<CategoryResponse>, ApiError> {
    metrics::record("category", "update");
    let mut category = input.to_entity();
    category.id = Some(id);
    Ok(Json(state.categories.update(category).await?))
}

#[utoipa::path(
    delete, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses((status = 200, description = "Deleted"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<DeleteResponse>, ApiError> {
    metrics::record("category", "delete");
    Ok(Json(state.categories.delete(Some(id)).await?))
}

#[utoipa::path(
    delete, path = "/api/categories", tag = "categories",
    request_body = Vec<i64>,
    responses((status = 200, description = "Deleted; unknown ids are ignored"))
)]
pub async fn delete_all(State(state): State<ServerState>, Json(ids): Json<Vec<i64>>) -> Result<Json<DeleteResponse>, ApiError> {
    metrics::record("category", "delete_all");
    Ok(Json(state.categories.delete_all(&ids).await?))
}
