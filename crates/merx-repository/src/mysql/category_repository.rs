//! MySQL category repository implementation.

use crate::{traits::CategoryRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use merx_core::{Category, CategoryId, MerxError, MerxResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const CATEGORY_COLUMNS: &str = "id, name, parent_id, is_active, created_at, updated_at";

/// MySQL category repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = CategoryRepository)]
pub struct MySqlCategoryRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCategoryRepository {
    /// Creates a new MySQL category repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a category.
#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String, // MySQL stores UUID as CHAR(36)
    name: String,
    parent_id: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = MerxError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| MerxError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let parent_id = row
            .parent_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| MerxError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Category {
            id: CategoryId::from_uuid(id),
            name: row.name,
            parent_id: parent_id.map(CategoryId::from_uuid),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn find_all(&self) -> MerxResult<Vec<Category>> {
        debug!("Finding all categories");

        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> MerxResult<Option<Category>> {
        debug!("Finding category by id: {}", id);

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?"
        ))
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Category::try_from).transpose()
    }

    async fn search(&self, query: &str) -> MerxResult<Vec<Category>> {
        debug!("Searching categories: {}", query);

        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories \
             WHERE MATCH(name) AGAINST (? IN NATURAL LANGUAGE MODE) \
             ORDER BY MATCH(name) AGAINST (? IN NATURAL LANGUAGE MODE) DESC"
        ))
        .bind(query)
        .bind(query)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn exists_by_name(&self, name: &str) -> MerxResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM categories WHERE name = ? LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, category: &Category) -> MerxResult<Category> {
        debug!("Inserting category: {}", category.name);

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, parent_id, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(category.id.into_inner().to_string())
        .bind(&category.name)
        .bind(category.parent_id.map(|p| p.into_inner().to_string()))
        .bind(category.is_active)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(category.id)
            .await?
            .ok_or_else(|| MerxError::Internal("Failed to fetch inserted category".to_string()))
    }

    async fn update(&self, category: &Category) -> MerxResult<Option<Category>> {
        debug!("Updating category: {}", category.id);

        sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, parent_id = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&category.name)
        .bind(category.parent_id.map(|p| p.into_inner().to_string()))
        .bind(category.is_active)
        .bind(category.updated_at)
        .bind(category.id.into_inner().to_string())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(category.id).await
    }

    async fn delete(&self, id: CategoryId) -> MerxResult<Option<Category>> {
        debug!("Deleting category: {}", id);

        let Some(category) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(Some(category))
    }
}

impl std::fmt::Debug for MySqlCategoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCategoryRepository").finish_non_exhaustive()
    }
}
