//! Repository trait definitions.

use async_trait::async_trait;
use merx_core::{Category, CategoryId, Interface, MerxResult, Product, ProductId};

/// Product repository trait.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds all active products, newest first.
    async fn find_all_active(&self) -> MerxResult<Vec<Product>>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> MerxResult<Option<Product>>;

    /// Finds active products in a category.
    async fn find_by_category(&self, category_id: CategoryId) -> MerxResult<Vec<Product>>;

    /// Full-text search over active products, best match first.
    /// Callers pass an already-normalized query.
    async fn search(&self, query: &str) -> MerxResult<Vec<Product>>;

    /// Inserts a new product and returns the stored row.
    async fn insert(&self, product: &Product) -> MerxResult<Product>;

    /// Inserts a batch of products atomically.
    async fn insert_many(&self, products: &[Product]) -> MerxResult<Vec<Product>>;

    /// Updates an existing product, returning the post-update row.
    /// Returns `None` when the product does not exist.
    async fn update(&self, product: &Product) -> MerxResult<Option<Product>>;

    /// Deletes a product, returning the deleted row.
    /// Returns `None` when the product does not exist.
    async fn delete(&self, id: ProductId) -> MerxResult<Option<Product>>;

    /// Deletes all products in a category, returning the count removed.
    async fn delete_by_category(&self, category_id: CategoryId) -> MerxResult<u64>;
}

/// Category repository trait.
#[async_trait]
pub trait CategoryRepository: Interface + Send + Sync {
    /// Finds all categories, newest first.
    async fn find_all(&self) -> MerxResult<Vec<Category>>;

    /// Finds a category by ID.
    async fn find_by_id(&self, id: CategoryId) -> MerxResult<Option<Category>>;

    /// Full-text search over categories, best match first.
    /// Callers pass an already-normalized query.
    async fn search(&self, query: &str) -> MerxResult<Vec<Category>>;

    /// Checks if a category with the given name exists.
    async fn exists_by_name(&self, name: &str) -> MerxResult<bool>;

    /// Inserts a new category and returns the stored row.
    async fn insert(&self, category: &Category) -> MerxResult<Category>;

    /// Updates an existing category, returning the post-update row.
    /// Returns `None` when the category does not exist.
    async fn update(&self, category: &Category) -> MerxResult<Option<Category>>;

    /// Deletes a category, returning the deleted row.
    /// Returns `None` when the category does not exist.
    async fn delete(&self, id: CategoryId) -> MerxResult<Option<Category>>;
}
