//! Product-related DTOs.

use chrono::{DateTime, Utc};
use merx_core::validation::rules;
use merx_core::{CategoryId, Product, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = rules::not_blank)
    )]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub category_id: CategoryId,

    #[serde(default)]
    #[validate(custom(function = rules::valid_image_urls))]
    pub images: Vec<String>,
}

/// Request to update a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub category_id: Option<CategoryId>,

    #[validate(custom(function = rules::valid_image_urls))]
    pub images: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

/// Product response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: CategoryId,
    pub images: Vec<String>,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            images: product.images,
            rating_avg: product.rating_avg,
            rating_count: product.rating_count,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Response for a bulk product creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkCreateResponse {
    /// Number of products created.
    pub count: usize,
    /// The created products.
    pub products: Vec<ProductResponse>,
}

/// Response for a bulk delete by category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteByCategoryResponse {
    /// Number of products removed.
    pub deleted_count: u64,
}
