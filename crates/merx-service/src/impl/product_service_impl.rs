//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, SEARCH_TTL};
use crate::dto::{
    BulkCreateResponse, CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::product_service::ProductService;
use async_trait::async_trait;
use merx_core::{CategoryId, MerxError, MerxResult, Product, ProductId, ValidateExt};
use merx_repository::ProductRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Concrete product service component for Shaku DI.
///
/// Read paths go through the cache; write paths mutate the store first and
/// invalidate afterwards.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl ProductServiceComponent {
    /// Creates a service without the DI container (for tests and tools).
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            product_repository,
            cache,
        }
    }

    fn build_product(request: CreateProductRequest) -> Product {
        Product::new(
            request.name,
            request.description,
            request.price,
            request.category_id,
            request.images,
        )
    }
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn create_product(&self, request: CreateProductRequest) -> MerxResult<ProductResponse> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;

        let product = Self::build_product(request);
        let saved = self.product_repository.insert(&product).await?;

        self.cache
            .invalidate(&[cache_keys::all(cache_keys::PRODUCT)])
            .await;

        info!("Product created: {}", saved.id);
        Ok(ProductResponse::from(saved))
    }

    async fn create_products(
        &self,
        requests: Vec<CreateProductRequest>,
    ) -> MerxResult<BulkCreateResponse> {
        debug!("Creating {} products", requests.len());

        // Validate everything up front so a bad element rejects the whole
        // batch before any row is written.
        for request in &requests {
            request.validate_request()?;
        }

        let products: Vec<Product> = requests.into_iter().map(Self::build_product).collect();
        let saved = self.product_repository.insert_many(&products).await?;

        self.cache
            .invalidate(&[cache_keys::all(cache_keys::PRODUCT)])
            .await;

        info!("Bulk created {} products", saved.len());
        Ok(BulkCreateResponse {
            count: saved.len(),
            products: saved.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn list_products(&self) -> MerxResult<Vec<ProductResponse>> {
        debug!("Listing products");

        let cache_key = cache_keys::all(cache_keys::PRODUCT);
        self.cache
            .read_through(
                &cache_key,
                self.cache.default_ttl(),
                |products: &Vec<ProductResponse>| !products.is_empty(),
                || async {
                    let products = self.product_repository.find_all_active().await?;
                    Ok(products.into_iter().map(ProductResponse::from).collect())
                },
            )
            .await
    }

    async fn get_product(&self, id: ProductId) -> MerxResult<ProductResponse> {
        debug!("Getting product: {}", id);

        let cache_key = cache_keys::by_id(cache_keys::PRODUCT, id);
        self.cache
            .read_through(&cache_key, self.cache.default_ttl(), |_| true, || async {
                let product = self
                    .product_repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| MerxError::not_found("Product", id))?;
                Ok(ProductResponse::from(product))
            })
            .await
    }

    async fn list_products_by_category(
        &self,
        category_id: CategoryId,
    ) -> MerxResult<Vec<ProductResponse>> {
        debug!("Listing products by category: {}", category_id);

        let cache_key = cache_keys::by_category(cache_keys::PRODUCT, category_id);
        self.cache
            .read_through(
                &cache_key,
                self.cache.default_ttl(),
                |products: &Vec<ProductResponse>| !products.is_empty(),
                || async {
                    let products = self
                        .product_repository
                        .find_by_category(category_id)
                        .await?;
                    if products.is_empty() {
                        return Err(MerxError::not_found("Product", category_id));
                    }
                    Ok(products.into_iter().map(ProductResponse::from).collect())
                },
            )
            .await
    }

    async fn search_products(&self, query: &str) -> MerxResult<Vec<ProductResponse>> {
        let normalized = cache_keys::normalize_query(query);
        if normalized.is_empty() {
            return Err(MerxError::validation("Search query is required"));
        }

        debug!("Searching products: {}", normalized);

        let cache_key = cache_keys::search(cache_keys::PRODUCT, query);
        self.cache
            .read_through(
                &cache_key,
                SEARCH_TTL,
                |products: &Vec<ProductResponse>| !products.is_empty(),
                || async {
                    let products = self.product_repository.search(&normalized).await?;
                    if products.is_empty() {
                        return Err(MerxError::not_found("Product", &normalized));
                    }
                    Ok(products.into_iter().map(ProductResponse::from).collect())
                },
            )
            .await
    }

    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> MerxResult<ProductResponse> {
        debug!("Updating product: {}", id);

        request.validate_request()?;

        let mut product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MerxError::not_found("Product", id))?;

        if let Some(name) = request.name {
            product.name = name;
        }
        if let Some(description) = request.description {
            product.description = description;
        }
        if let Some(price) = request.price {
            product.price = price;
        }
        if let Some(category_id) = request.category_id {
            product.category_id = category_id;
        }
        if let Some(images) = request.images {
            product.images = images;
        }
        if let Some(is_active) = request.is_active {
            product.is_active = is_active;
        }
        product.updated_at = chrono::Utc::now();

        let updated = self
            .product_repository
            .update(&product)
            .await?
            .ok_or_else(|| MerxError::not_found("Product", id))?;

        self.cache
            .invalidate(&[
                cache_keys::all(cache_keys::PRODUCT),
                cache_keys::by_id(cache_keys::PRODUCT, id),
            ])
            .await;

        info!("Product updated: {}", id);
        Ok(ProductResponse::from(updated))
    }

    async fn delete_product(&self, id: ProductId) -> MerxResult<ProductResponse> {
        debug!("Deleting product: {}", id);

        let deleted = self
            .product_repository
            .delete(id)
            .await?
            .ok_or_else(|| MerxError::not_found("Product", id))?;

        self.cache
            .invalidate(&[
                cache_keys::all(cache_keys::PRODUCT),
                cache_keys::by_id(cache_keys::PRODUCT, id),
            ])
            .await;

        info!("Product deleted: {}", id);
        Ok(ProductResponse::from(deleted))
    }

    async fn delete_products_by_category(&self, category_id: CategoryId) -> MerxResult<u64> {
        debug!("Deleting products by category: {}", category_id);

        let deleted_count = self
            .product_repository
            .delete_by_category(category_id)
            .await?;

        if deleted_count == 0 {
            return Err(MerxError::not_found("Product", category_id));
        }

        // Category-scoped and search keys are left to expire via TTL.
        self.cache
            .invalidate(&[cache_keys::all(cache_keys::PRODUCT)])
            .await;

        info!(
            "Deleted {} products in category {}",
            deleted_count, category_id
        );
        Ok(deleted_count)
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent").finish_non_exhaustive()
    }
}
