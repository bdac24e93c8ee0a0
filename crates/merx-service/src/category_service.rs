//! Category service trait definition.

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use async_trait::async_trait;
use merx_core::{CategoryId, Interface, MerxResult};

/// Category service trait.
#[async_trait]
pub trait CategoryService: Interface + Send + Sync {
    /// Creates a new category. A duplicate name is a conflict error.
    async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> MerxResult<CategoryResponse>;

    /// Lists all categories (cached).
    async fn list_categories(&self) -> MerxResult<Vec<CategoryResponse>>;

    /// Gets a category by ID (cached).
    async fn get_category(&self, id: CategoryId) -> MerxResult<CategoryResponse>;

    /// Searches categories (cached with a short TTL). A blank query is a
    /// validation error; empty results are a not-found error.
    async fn search_categories(&self, query: &str) -> MerxResult<Vec<CategoryResponse>>;

    /// Updates a category.
    async fn update_category(
        &self,
        id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> MerxResult<CategoryResponse>;

    /// Deletes a category, returning the removed record.
    async fn delete_category(&self, id: CategoryId) -> MerxResult<CategoryResponse>;
}
