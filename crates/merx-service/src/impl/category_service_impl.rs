//! Category service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, SEARCH_TTL};
use crate::category_service::CategoryService;
use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use async_trait::async_trait;
use merx_core::{Category, CategoryId, MerxError, MerxResult, ValidateExt};
use merx_repository::CategoryRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Concrete category service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = CategoryService)]
pub struct CategoryServiceComponent {
    #[shaku(inject)]
    category_repository: Arc<dyn CategoryRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl CategoryServiceComponent {
    /// Creates a service without the DI container (for tests and tools).
    #[must_use]
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            category_repository,
            cache,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceComponent {
    async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> MerxResult<CategoryResponse> {
        debug!("Creating category: {}", request.name);

        request.validate_request()?;

        if self.category_repository.exists_by_name(&request.name).await? {
            return Err(MerxError::Conflict(format!(
                "Category '{}' already exists",
                request.name
            )));
        }

        let category = Category::new(request.name, request.parent_id);
        let saved = self.category_repository.insert(&category).await?;

        self.cache
            .invalidate(&[cache_keys::all(cache_keys::CATEGORY)])
            .await;

        info!("Category created: {}", saved.id);
        Ok(CategoryResponse::from(saved))
    }

    async fn list_categories(&self) -> MerxResult<Vec<CategoryResponse>> {
        debug!("Listing categories");

        let cache_key = cache_keys::all(cache_keys::CATEGORY);
        self.cache
            .read_through(
                &cache_key,
                self.cache.default_ttl(),
                |categories: &Vec<CategoryResponse>| !categories.is_empty(),
                || async {
                    let categories = self.category_repository.find_all().await?;
                    Ok(categories.into_iter().map(CategoryResponse::from).collect())
                },
            )
            .await
    }

    async fn get_category(&self, id: CategoryId) -> MerxResult<CategoryResponse> {
        debug!("Getting category: {}", id);

        let cache_key = cache_keys::by_id(cache_keys::CATEGORY, id);
        self.cache
            .read_through(&cache_key, self.cache.default_ttl(), |_| true, || async {
                let category = self
                    .category_repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| MerxError::not_found("Category", id))?;
                Ok(CategoryResponse::from(category))
            })
            .await
    }

    async fn search_categories(&self, query: &str) -> MerxResult<Vec<CategoryResponse>> {
        let normalized = cache_keys::normalize_query(query);
        if normalized.is_empty() {
            return Err(MerxError::validation("Search query is required"));
        }

        debug!("Searching categories: {}", normalized);

        let cache_key = cache_keys::search(cache_keys::CATEGORY, query);
        self.cache
            .read_through(
                &cache_key,
                SEARCH_TTL,
                |categories: &Vec<CategoryResponse>| !categories.is_empty(),
                || async {
                    let categories = self.category_repository.search(&normalized).await?;
                    if categories.is_empty() {
                        return Err(MerxError::not_found("Category", &normalized));
                    }
                    Ok(categories.into_iter().map(CategoryResponse::from).collect())
                },
            )
            .await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> MerxResult<CategoryResponse> {
        debug!("Updating category: {}", id);

        request.validate_request()?;

        let mut category = self
            .category_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MerxError::not_found("Category", id))?;

        if let Some(name) = request.name {
            if name != category.name && self.category_repository.exists_by_name(&name).await? {
                return Err(MerxError::Conflict(format!(
                    "Category '{}' already exists",
                    name
                )));
            }
            category.name = name;
        }
        if let Some(parent_id) = request.parent_id {
            category.parent_id = Some(parent_id);
        }
        if let Some(is_active) = request.is_active {
            category.is_active = is_active;
        }
        category.updated_at = chrono::Utc::now();

        let updated = self
            .category_repository
            .update(&category)
            .await?
            .ok_or_else(|| MerxError::not_found("Category", id))?;

        self.cache
            .invalidate(&[
                cache_keys::all(cache_keys::CATEGORY),
                cache_keys::by_id(cache_keys::CATEGORY, id),
            ])
            .await;

        info!("Category updated: {}", id);
        Ok(CategoryResponse::from(updated))
    }

    async fn delete_category(&self, id: CategoryId) -> MerxResult<CategoryResponse> {
        debug!("Deleting category: {}", id);

        let deleted = self
            .category_repository
            .delete(id)
            .await?
            .ok_or_else(|| MerxError::not_found("Category", id))?;

        self.cache
            .invalidate(&[
                cache_keys::all(cache_keys::CATEGORY),
                cache_keys::by_id(cache_keys::CATEGORY, id),
            ])
            .await;

        info!("Category deleted: {}", id);
        Ok(CategoryResponse::from(deleted))
    }
}

impl std::fmt::Debug for CategoryServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#impl::test_support::{MockCategoryRepository, RecordingCache};

    fn service(
        repo: Arc<MockCategoryRepository>,
        cache: Arc<RecordingCache>,
    ) -> CategoryServiceComponent {
        CategoryServiceComponent::new(repo, cache)
    }

    fn create_request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            parent_id: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache);

        svc.create_category(create_request("Electronics")).await.unwrap();
        let result = svc.create_category(create_request("Electronics")).await;
        assert!(matches!(result, Err(MerxError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_invalidates_all() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache.clone());

        svc.create_category(create_request("Electronics")).await.unwrap();
        assert_eq!(cache.deleted_keys(), vec!["category:all".to_string()]);
    }

    #[tokio::test]
    async fn test_get_category_caches_result() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache.clone());

        let created = svc.create_category(create_request("Audio")).await.unwrap();
        svc.get_category(created.id).await.unwrap();

        assert!(cache.contains(&cache_keys::by_id(cache_keys::CATEGORY, created.id)));
    }

    #[tokio::test]
    async fn test_update_to_existing_name_is_conflict() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache);

        svc.create_category(create_request("Audio")).await.unwrap();
        let video = svc.create_category(create_request("Video")).await.unwrap();

        let result = svc
            .update_category(
                video.id,
                UpdateCategoryRequest {
                    name: Some("Audio".to_string()),
                    parent_id: None,
                    is_active: None,
                },
            )
            .await;

        assert!(matches!(result, Err(MerxError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_invalidates_all_and_by_id() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache.clone());

        let created = svc.create_category(create_request("Audio")).await.unwrap();
        cache.clear_log();

        svc.delete_category(created.id).await.unwrap();
        assert_eq!(
            cache.deleted_keys(),
            vec![
                "category:all".to_string(),
                format!("category:byId:{}", created.id),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_uses_normalized_key_and_not_found_when_empty() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo, cache.clone());

        svc.create_category(create_request("Home Office")).await.unwrap();

        svc.search_categories("  HOME ").await.unwrap();
        assert!(cache.contains("category:search:home"));

        let result = svc.search_categories("garden").await;
        assert!(matches!(result, Err(MerxError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_failed_mutation_performs_no_invalidation() {
        let repo = Arc::new(MockCategoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let svc = service(repo.clone(), cache.clone());

        let created = svc.create_category(create_request("Audio")).await.unwrap();
        cache.clear_log();

        repo.fail_mutations();
        let result = svc.delete_category(created.id).await;

        assert!(matches!(result, Err(MerxError::Database(_))));
        assert!(cache.deleted_keys().is_empty());
    }
}
