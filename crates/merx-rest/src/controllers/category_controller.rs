//! Category management controller.

use crate::{
    responses::{created, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use merx_core::{CategoryId, MerxError};
use merx_service::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use serde::Deserialize;
use tracing::debug;

/// Query parameters for category search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Creates the category router.
///
/// `/search` is registered before `/:id` so it is never captured as an ID.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/search", get(search_categories))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// Create a new category.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid payload", body = merx_core::ErrorResponse),
        (status = 409, description = "Duplicate category name", body = merx_core::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    debug!("Create category request: {}", request.name);

    let response = state.category_service.create_category(request).await?;
    Ok(created(response))
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<CategoryResponse>> {
    debug!("List categories request");

    let response = state.category_service.list_categories().await?;
    ok(response)
}

/// Search categories by name.
#[utoipa::path(
    get,
    path = "/categories/search",
    tag = "categories",
    params(
        ("q" = String, Query, description = "Search terms")
    ),
    responses(
        (status = 200, description = "Matching categories", body = Vec<CategoryResponse>),
        (status = 400, description = "Missing or empty query", body = merx_core::ErrorResponse),
        (status = 404, description = "No matches", body = merx_core::ErrorResponse)
    )
)]
pub async fn search_categories(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<CategoryResponse>> {
    let q = query.q.unwrap_or_default();
    debug!("Search categories request: {}", q);

    let response = state.category_service.search_categories(&q).await?;
    ok(response)
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryResponse),
        (status = 404, description = "Category not found", body = merx_core::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CategoryResponse> {
    debug!("Get category request: {}", id);

    let id = parse_category_id(&id)?;
    let response = state.category_service.get_category(id).await?;
    ok(response)
}

/// Update a category.
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated category", body = CategoryResponse),
        (status = 404, description = "Category not found", body = merx_core::ErrorResponse),
        (status = 409, description = "Duplicate category name", body = merx_core::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCategoryRequest>,
) -> ApiResult<CategoryResponse> {
    debug!("Update category request: {}", id);

    let id = parse_category_id(&id)?;
    let response = state.category_service.update_category(id, request).await?;
    ok(response)
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = merx_core::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Delete category request: {}", id);

    let id = parse_category_id(&id)?;
    state.category_service.delete_category(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Category deleted")),
    ))
}

/// Helper to parse a category ID from a path parameter.
fn parse_category_id(id: &str) -> Result<CategoryId, AppError> {
    CategoryId::parse(id)
        .map_err(|_| AppError(MerxError::validation(format!("Invalid category ID: {}", id))))
}
