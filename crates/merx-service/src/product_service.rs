//! Product service trait definition.

use crate::dto::{
    BulkCreateResponse, CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use async_trait::async_trait;
use merx_core::{CategoryId, Interface, MerxResult, ProductId};

/// Product service trait.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Creates a new product.
    async fn create_product(&self, request: CreateProductRequest) -> MerxResult<ProductResponse>;

    /// Creates a batch of products. Every request must validate before any
    /// row is written.
    async fn create_products(
        &self,
        requests: Vec<CreateProductRequest>,
    ) -> MerxResult<BulkCreateResponse>;

    /// Lists all active products (cached).
    async fn list_products(&self) -> MerxResult<Vec<ProductResponse>>;

    /// Gets a product by ID (cached).
    async fn get_product(&self, id: ProductId) -> MerxResult<ProductResponse>;

    /// Lists active products in a category (cached). Empty results are a
    /// not-found error.
    async fn list_products_by_category(
        &self,
        category_id: CategoryId,
    ) -> MerxResult<Vec<ProductResponse>>;

    /// Searches active products (cached with a short TTL). A blank query is
    /// a validation error; empty results are a not-found error.
    async fn search_products(&self, query: &str) -> MerxResult<Vec<ProductResponse>>;

    /// Updates a product.
    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> MerxResult<ProductResponse>;

    /// Deletes a product, returning the removed record.
    async fn delete_product(&self, id: ProductId) -> MerxResult<ProductResponse>;

    /// Deletes all products in a category, returning the count removed.
    /// Zero deletions are a not-found error.
    async fn delete_products_by_category(&self, category_id: CategoryId) -> MerxResult<u64>;
}
