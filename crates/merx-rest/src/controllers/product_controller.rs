//! Product catalog controller.

use crate::{
    responses::{created, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use merx_core::{CategoryId, MerxError, ProductId};
use merx_service::{
    BulkCreateResponse, CreateProductRequest, DeleteByCategoryResponse, ProductResponse,
    UpdateProductRequest,
};
use serde::Deserialize;
use tracing::debug;

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Creates the product router.
///
/// Literal routes are registered before the `/:id` wildcard so that
/// `/search` and `/category/:categoryId` are never captured as an ID.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_products))
        .route("/search", get(search_products))
        .route(
            "/category/:category_id",
            get(list_products_by_category).delete(delete_products_by_category),
        )
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create one product, or a batch when the body is a JSON array.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product(s) created", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = merx_core::ErrorResponse)
    )
)]
pub async fn create_products(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response, AppError> {
    match payload {
        serde_json::Value::Array(_) => {
            let requests: Vec<CreateProductRequest> = serde_json::from_value(payload)
                .map_err(|e| MerxError::validation(format!("Invalid product array: {}", e)))?;
            debug!("Bulk create products request: {} items", requests.len());

            let response = state.product_service.create_products(requests).await?;
            Ok(created(response).into_response())
        }
        serde_json::Value::Object(_) => {
            let request: CreateProductRequest = serde_json::from_value(payload)
                .map_err(|e| MerxError::validation(format!("Invalid product: {}", e)))?;
            debug!("Create product request: {}", request.name);

            let response = state.product_service.create_product(request).await?;
            Ok(created(response).into_response())
        }
        _ => Err(AppError(MerxError::validation(
            "Request body must be a product object or an array of products",
        ))),
    }
}

/// List all active products.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "Active products", body = Vec<ProductResponse>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products request");

    let response = state.product_service.list_products().await?;
    ok(response)
}

/// Search products by name or description.
#[utoipa::path(
    get,
    path = "/products/search",
    tag = "products",
    params(
        ("q" = String, Query, description = "Search terms")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductResponse>),
        (status = 400, description = "Missing or empty query", body = merx_core::ErrorResponse),
        (status = 404, description = "No matches", body = merx_core::ErrorResponse)
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<ProductResponse>> {
    let q = query.q.unwrap_or_default();
    debug!("Search products request: {}", q);

    let response = state.product_service.search_products(&q).await?;
    ok(response)
}

/// List active products in a category.
#[utoipa::path(
    get,
    path = "/products/category/{categoryId}",
    tag = "products",
    params(
        ("categoryId" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<ProductResponse>),
        (status = 404, description = "No products in the category", body = merx_core::ErrorResponse)
    )
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products by category request: {}", category_id);

    let category_id = parse_category_id(&category_id)?;
    let response = state
        .product_service
        .list_products_by_category(category_id)
        .await?;
    ok(response)
}

/// Delete every product in a category.
#[utoipa::path(
    delete,
    path = "/products/category/{categoryId}",
    tag = "products",
    params(
        ("categoryId" = CategoryId, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products deleted", body = DeleteByCategoryResponse),
        (status = 404, description = "No products in the category", body = merx_core::ErrorResponse)
    )
)]
pub async fn delete_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<DeleteByCategoryResponse> {
    debug!("Delete products by category request: {}", category_id);

    let category_id = parse_category_id(&category_id)?;
    let deleted_count = state
        .product_service
        .delete_products_by_category(category_id)
        .await?;
    ok(DeleteByCategoryResponse { deleted_count })
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = ProductId, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "Product not found", body = merx_core::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let id = parse_product_id(&id)?;
    let response = state.product_service.get_product(id).await?;
    ok(response)
}

/// Update a product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = ProductId, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 404, description = "Product not found", body = merx_core::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Update product request: {}", id);

    let id = parse_product_id(&id)?;
    let response = state.product_service.update_product(id, request).await?;
    ok(response)
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = ProductId, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = merx_core::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Delete product request: {}", id);

    let id = parse_product_id(&id)?;
    state.product_service.delete_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product deleted")),
    ))
}

/// Helper to parse a product ID from a path parameter.
fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(MerxError::validation(format!("Invalid product ID: {}", id))))
}

/// Helper to parse a category ID from a path parameter.
fn parse_category_id(id: &str) -> Result<CategoryId, AppError> {
    CategoryId::parse(id)
        .map_err(|_| AppError(MerxError::validation(format!("Invalid category ID: {}", id))))
}
