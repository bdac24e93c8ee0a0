//! # Merx Repository
//!
//! Data access layer for the Merx commerce backend:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository> / Arc<dyn CategoryRepository>
//! MySqlProductRepository / MySqlCategoryRepository   (SQLx)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use merx_core::{CategoryId, MerxResult, Product, ProductId};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory mock repository for testing trait semantics.
    struct InMemoryProductRepository {
        products: Mutex<HashMap<ProductId, Product>>,
    }

    impl InMemoryProductRepository {
        fn new() -> Self {
            Self {
                products: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn find_all_active(&self) -> MerxResult<Vec<Product>> {
            let mut products: Vec<Product> = self
                .products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.is_active)
                .cloned()
                .collect();
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(products)
        }

        async fn find_by_id(&self, id: ProductId) -> MerxResult<Option<Product>> {
            Ok(self.products.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_category(&self, category_id: CategoryId) -> MerxResult<Vec<Product>> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.category_id == category_id && p.is_active)
                .cloned()
                .collect())
        }

        async fn search(&self, query: &str) -> MerxResult<Vec<Product>> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.is_active && p.name.to_lowercase().contains(query))
                .cloned()
                .collect())
        }

        async fn insert(&self, product: &Product) -> MerxResult<Product> {
            self.products
                .lock()
                .unwrap()
                .insert(product.id, product.clone());
            Ok(product.clone())
        }

        async fn insert_many(&self, products: &[Product]) -> MerxResult<Vec<Product>> {
            let mut guard = self.products.lock().unwrap();
            for product in products {
                guard.insert(product.id, product.clone());
            }
            Ok(products.to_vec())
        }

        async fn update(&self, product: &Product) -> MerxResult<Option<Product>> {
            let mut guard = self.products.lock().unwrap();
            if !guard.contains_key(&product.id) {
                return Ok(None);
            }
            guard.insert(product.id, product.clone());
            Ok(Some(product.clone()))
        }

        async fn delete(&self, id: ProductId) -> MerxResult<Option<Product>> {
            Ok(self.products.lock().unwrap().remove(&id))
        }

        async fn delete_by_category(&self, category_id: CategoryId) -> MerxResult<u64> {
            let mut guard = self.products.lock().unwrap();
            let before = guard.len();
            guard.retain(|_, p| p.category_id != category_id);
            Ok((before - guard.len()) as u64)
        }
    }

    fn create_product(name: &str, category_id: CategoryId) -> Product {
        Product::new(
            name.to_string(),
            format!("{} description", name),
            19.99,
            category_id,
            vec![],
        )
    }

    #[tokio::test]
    async fn test_find_all_excludes_inactive() {
        let repo = InMemoryProductRepository::new();
        let category = CategoryId::new();

        let active = create_product("visible", category);
        let mut inactive = create_product("hidden", category);
        inactive.deactivate();

        repo.insert(&active).await.unwrap();
        repo.insert(&inactive).await.unwrap();

        let all = repo.find_all_active().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "visible");
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_row() {
        let repo = InMemoryProductRepository::new();
        let product = create_product("gadget", CategoryId::new());
        repo.insert(&product).await.unwrap();

        let deleted = repo.delete(product.id).await.unwrap();
        assert_eq!(deleted.map(|p| p.id), Some(product.id));

        let again = repo.delete(product.id).await.unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_delete_by_category_returns_count() {
        let repo = InMemoryProductRepository::new();
        let category = CategoryId::new();
        let other = CategoryId::new();

        repo.insert(&create_product("a", category)).await.unwrap();
        repo.insert(&create_product("b", category)).await.unwrap();
        repo.insert(&create_product("c", other)).await.unwrap();

        assert_eq!(repo.delete_by_category(category).await.unwrap(), 2);
        assert_eq!(repo.delete_by_category(category).await.unwrap(), 0);
        assert_eq!(repo.find_by_category(other).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();
        let product = create_product("ghost", CategoryId::new());
        assert!(repo.update(&product).await.unwrap().is_none());
    }
}
