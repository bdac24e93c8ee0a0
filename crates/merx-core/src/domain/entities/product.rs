//! Product entity.

use crate::{CategoryId, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity representing a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Unique identifier for the product.
    pub id: ProductId,

    /// Product display name.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Unit price.
    pub price: f64,

    /// Category this product belongs to.
    pub category_id: CategoryId,

    /// Image URLs.
    pub images: Vec<String>,

    /// Average customer rating.
    pub rating_avg: f64,

    /// Number of ratings received.
    pub rating_count: i64,

    /// Whether the product is visible on read paths.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new active product with no ratings.
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        price: f64,
        category_id: CategoryId,
        images: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::new(),
            name,
            description,
            price,
            category_id,
            images,
            rating_avg: 0.0,
            rating_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the product, hiding it from read paths.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Folds a new rating into the running average.
    pub fn record_rating(&mut self, rating: f64) {
        let total = self.rating_avg * self.rating_count as f64 + rating;
        self.rating_count += 1;
        self.rating_avg = total / self.rating_count as f64;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            "Mechanical Keyboard".to_string(),
            "Tenkeyless, brown switches".to_string(),
            89.99,
            CategoryId::new(),
            vec!["https://cdn.example.com/kb.png".to_string()],
        )
    }

    #[test]
    fn test_new_product_is_active() {
        let product = sample_product();
        assert!(product.is_active);
        assert_eq!(product.rating_count, 0);
        assert_eq!(product.rating_avg, 0.0);
    }

    #[test]
    fn test_deactivate() {
        let mut product = sample_product();
        product.deactivate();
        assert!(!product.is_active);
    }

    #[test]
    fn test_record_rating_running_average() {
        let mut product = sample_product();
        product.record_rating(4.0);
        product.record_rating(2.0);
        assert_eq!(product.rating_count, 2);
        assert!((product.rating_avg - 3.0).abs() < f64::EPSILON);
    }
}
