//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use crate::controllers::health_controller::HealthResponse;
use crate::responses::MessageResponse;
use merx_core::{CategoryId, ErrorResponse, ProductId};
use merx_service::{
    BulkCreateResponse, CategoryResponse, CreateCategoryRequest, CreateProductRequest,
    DeleteByCategoryResponse, ProductResponse, UpdateCategoryRequest, UpdateProductRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Merx API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Merx Commerce API",
        version = "1.0.0",
        description = "RESTful API for the Merx commerce backend",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::create_products,
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::search_products,
        crate::controllers::product_controller::list_products_by_category,
        crate::controllers::product_controller::delete_products_by_category,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        // Category endpoints
        crate::controllers::category_controller::create_category,
        crate::controllers::category_controller::list_categories,
        crate::controllers::category_controller::search_categories,
        crate::controllers::category_controller::get_category,
        crate::controllers::category_controller::update_category,
        crate::controllers::category_controller::delete_category,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            ProductId,
            CategoryId,
            ErrorResponse,
            // Product DTOs
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            BulkCreateResponse,
            DeleteByCategoryResponse,
            // Category DTOs
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryResponse,
            // Shared
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "categories", description = "Category management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
