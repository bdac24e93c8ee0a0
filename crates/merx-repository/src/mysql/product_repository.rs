//! MySQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use merx_core::{CategoryId, MerxError, MerxResult, Product, ProductId};
use shaku::Component;
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, name, description, price, category_id, images, \
     rating_avg, rating_count, is_active, created_at, updated_at";

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String, // MySQL stores UUID as CHAR(36)
    name: String,
    description: String,
    price: f64,
    category_id: String,
    images: Json<Vec<String>>,
    rating_avg: f64,
    rating_count: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = MerxError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| MerxError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let category_id = Uuid::parse_str(&row.category_id)
            .map_err(|e| MerxError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Product {
            id: ProductId::from_uuid(id),
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: CategoryId::from_uuid(category_id),
            images: row.images.0,
            rating_avg: row.rating_avg,
            rating_count: row.rating_count,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_all_active(&self) -> MerxResult<Vec<Product>> {
        debug!("Finding all active products");

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE is_active = TRUE \
             ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> MerxResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_category(&self, category_id: CategoryId) -> MerxResult<Vec<Product>> {
        debug!("Finding products by category: {}", category_id);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE category_id = ? AND is_active = TRUE \
             ORDER BY created_at DESC"
        ))
        .bind(category_id.into_inner().to_string())
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn search(&self, query: &str) -> MerxResult<Vec<Product>> {
        debug!("Searching products: {}", query);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE MATCH(name, description) AGAINST (? IN NATURAL LANGUAGE MODE) \
               AND is_active = TRUE \
             ORDER BY MATCH(name, description) AGAINST (? IN NATURAL LANGUAGE MODE) DESC"
        ))
        .bind(query)
        .bind(query)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn insert(&self, product: &Product) -> MerxResult<Product> {
        debug!("Inserting product: {}", product.name);

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, category_id, images,
                                  rating_avg, rating_count, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.into_inner().to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id.into_inner().to_string())
        .bind(Json(&product.images))
        .bind(product.rating_avg)
        .bind(product.rating_count)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(product.id)
            .await?
            .ok_or_else(|| MerxError::Internal("Failed to fetch inserted product".to_string()))
    }

    async fn insert_many(&self, products: &[Product]) -> MerxResult<Vec<Product>> {
        debug!("Inserting {} products", products.len());

        let mut tx = self.pool.inner().begin().await?;

        for product in products {
            sqlx::query(
                r#"
                INSERT INTO products (id, name, description, price, category_id, images,
                                      rating_avg, rating_count, is_active, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(product.id.into_inner().to_string())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.category_id.into_inner().to_string())
            .bind(Json(&product.images))
            .bind(product.rating_avg)
            .bind(product.rating_count)
            .bind(product.is_active)
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let mut stored = Vec::with_capacity(products.len());
        for product in products {
            let row = self.find_by_id(product.id).await?.ok_or_else(|| {
                MerxError::Internal("Failed to fetch inserted product".to_string())
            })?;
            stored.push(row);
        }
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> MerxResult<Option<Product>> {
        debug!("Updating product: {}", product.id);

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, category_id = ?, images = ?,
                rating_avg = ?, rating_count = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id.into_inner().to_string())
        .bind(Json(&product.images))
        .bind(product.rating_avg)
        .bind(product.rating_count)
        .bind(product.is_active)
        .bind(product.updated_at)
        .bind(product.id.into_inner().to_string())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(product.id).await
    }

    async fn delete(&self, id: ProductId) -> MerxResult<Option<Product>> {
        debug!("Deleting product: {}", id);

        let Some(product) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(Some(product))
    }

    async fn delete_by_category(&self, category_id: CategoryId) -> MerxResult<u64> {
        debug!("Deleting products by category: {}", category_id);

        let result = sqlx::query("DELETE FROM products WHERE category_id = ?")
            .bind(category_id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
