//! Dependency injection module using Shaku.
//!
//! Wires the database pool, repositories, Redis cache, and business
//! services into a single module for the monolithic deployment.

use merx_config::{CacheConfig, DatabaseConfig, RedisConfig};
use merx_core::{MerxError, MerxResult};
use merx_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlCategoryRepository,
    MySqlProductRepository,
};
use merx_service::{
    CacheInterface, CategoryService, CategoryServiceComponent, ProductService,
    ProductServiceComponent, RedisCacheService, RedisCacheServiceParameters,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            MySqlCategoryRepository,
            RedisCacheService,
            ProductServiceComponent,
            CategoryServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module.
///
/// Connects the MySQL pool, creates the Redis pool when enabled, and wires
/// everything through Shaku.
pub async fn build_app_module(
    db_config: &DatabaseConfig,
    redis_config: &RedisConfig,
    cache_config: &CacheConfig,
) -> MerxResult<Arc<AppModule>> {
    let db_pool = DatabasePool::new(db_config).await?;
    db_pool.run_migrations().await?;

    let cache_pool = if redis_config.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&redis_config.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| MerxError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Some(Arc::new(pool))
    } else {
        None
    };

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
            default_ttl: cache_config.default_ttl(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving common services from the module.
pub trait ServiceResolver {
    /// Resolves the product service from the module.
    fn product_service(&self) -> Arc<dyn ProductService>;

    /// Resolves the category service from the module.
    fn category_service(&self) -> Arc<dyn CategoryService>;
}

impl ServiceResolver for AppModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }

    fn category_service(&self) -> Arc<dyn CategoryService> {
        self.resolve()
    }
}

/// Trait for resolving the database pool from the module.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
