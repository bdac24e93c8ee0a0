//! Wishlist entity.

use crate::{ProductId, UserId, WishlistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wishlist entity, one per user, holding product references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Wishlist {
    /// Unique identifier for the wishlist.
    pub id: WishlistId,

    /// Owning user.
    pub user_id: UserId,

    /// Saved products.
    pub products: Vec<ProductId>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    /// Creates an empty wishlist for a user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: WishlistId::new(),
            user_id,
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a product if not already saved. Returns whether it was added.
    pub fn add_product(&mut self, product_id: ProductId) -> bool {
        if self.products.contains(&product_id) {
            return false;
        }
        self.products.push(product_id);
        self.updated_at = Utc::now();
        true
    }

    /// Removes a product. Returns whether it was present.
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| *p != product_id);
        if self.products.len() != before {
            self.updated_at = Utc::now();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new(UserId::new());
        let product = ProductId::new();
        assert!(wishlist.add_product(product));
        assert!(!wishlist.add_product(product));
        assert_eq!(wishlist.products.len(), 1);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut wishlist = Wishlist::new(UserId::new());
        let product = ProductId::new();
        wishlist.add_product(product);
        assert!(wishlist.remove_product(product));
        assert!(!wishlist.remove_product(product));
    }
}
