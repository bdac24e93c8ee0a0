//! Shared test doubles for service tests.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use merx_core::{Category, CategoryId, MerxError, MerxResult, Product, ProductId};
use merx_repository::{CategoryRepository, ProductRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory product repository with call counting and a mutation kill
/// switch.
pub struct MockProductRepository {
    products: Mutex<Vec<Product>>,
    find_by_id_calls: AtomicUsize,
    fail_mutations: AtomicBool,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            find_by_id_calls: AtomicUsize::new(0),
            fail_mutations: AtomicBool::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent mutation fail with a database error.
    pub fn fail_mutations(&self) {
        self.fail_mutations.store(true, Ordering::SeqCst);
    }

    fn check_mutations(&self) -> MerxResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(MerxError::Database("mutation failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_all_active(&self) -> MerxResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProductId) -> MerxResult<Option<Product>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_category(&self, category_id: CategoryId) -> MerxResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category_id == category_id && p.is_active)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> MerxResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active && p.name.to_lowercase().contains(query))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: &Product) -> MerxResult<Product> {
        self.check_mutations()?;
        self.products.lock().unwrap().push(product.clone());
        Ok(product.clone())
    }

    async fn insert_many(&self, products: &[Product]) -> MerxResult<Vec<Product>> {
        self.check_mutations()?;
        self.products.lock().unwrap().extend_from_slice(products);
        Ok(products.to_vec())
    }

    async fn update(&self, product: &Product) -> MerxResult<Option<Product>> {
        self.check_mutations()?;
        let mut guard = self.products.lock().unwrap();
        match guard.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: ProductId) -> MerxResult<Option<Product>> {
        self.check_mutations()?;
        let mut guard = self.products.lock().unwrap();
        match guard.iter().position(|p| p.id == id) {
            Some(index) => Ok(Some(guard.remove(index))),
            None => Ok(None),
        }
    }

    async fn delete_by_category(&self, category_id: CategoryId) -> MerxResult<u64> {
        self.check_mutations()?;
        let mut guard = self.products.lock().unwrap();
        let before = guard.len();
        guard.retain(|p| p.category_id != category_id);
        Ok((before - guard.len()) as u64)
    }
}

/// In-memory category repository.
pub struct MockCategoryRepository {
    categories: Mutex<Vec<Category>>,
    fail_mutations: AtomicBool,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            fail_mutations: AtomicBool::new(false),
        }
    }

    pub fn fail_mutations(&self) {
        self.fail_mutations.store(true, Ordering::SeqCst);
    }

    fn check_mutations(&self) -> MerxResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(MerxError::Database("mutation failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_all(&self) -> MerxResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> MerxResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn search(&self, query: &str) -> MerxResult<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(query))
            .cloned()
            .collect())
    }

    async fn exists_by_name(&self, name: &str) -> MerxResult<bool> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name == name))
    }

    async fn insert(&self, category: &Category) -> MerxResult<Category> {
        self.check_mutations()?;
        self.categories.lock().unwrap().push(category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> MerxResult<Option<Category>> {
        self.check_mutations()?;
        let mut guard = self.categories.lock().unwrap();
        match guard.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CategoryId) -> MerxResult<Option<Category>> {
        self.check_mutations()?;
        let mut guard = self.categories.lock().unwrap();
        match guard.iter().position(|c| c.id == id) {
            Some(index) => Ok(Some(guard.remove(index))),
            None => Ok(None),
        }
    }
}

/// In-memory cache that records deletions and can simulate an outage.
pub struct RecordingCache {
    entries: Mutex<HashMap<String, String>>,
    deleted: Mutex<Vec<String>>,
    failing: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// Cache whose every operation fails, as during a Redis outage.
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    /// Keys deleted so far, in order.
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn clear_log(&self) {
        self.deleted.lock().unwrap().clear();
    }

    fn check_failing(&self) -> MerxResult<()> {
        if self.failing {
            return Err(MerxError::Cache("cache unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheInterface for RecordingCache {
    async fn get_raw(&self, key: &str) -> MerxResult<Option<String>> {
        self.check_failing()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> MerxResult<()> {
        self.check_failing()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> MerxResult<bool> {
        self.check_failing()?;
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> MerxResult<bool> {
        self.check_failing()?;
        Ok(self.entries.lock().unwrap().contains_key(key))
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn default_ttl(&self) -> Duration {
        Duration::from_secs(3600)
    }
}
