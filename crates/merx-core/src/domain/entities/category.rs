//! Category entity.

use crate::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category entity. Categories form a tree via `parent_id`; names are
/// unique across the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    /// Unique identifier for the category.
    pub id: CategoryId,

    /// Unique category name.
    pub name: String,

    /// Optional parent category.
    pub parent_id: Option<CategoryId>,

    /// Whether the category is visible.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new active category.
    #[must_use]
    pub fn new(name: String, parent_id: Option<CategoryId>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name,
            parent_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if this is a top-level category.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Electronics".to_string(), None);
        assert!(category.is_active);
        assert!(category.is_root());
    }

    #[test]
    fn test_child_category() {
        let parent = Category::new("Electronics".to_string(), None);
        let child = Category::new("Keyboards".to_string(), Some(parent.id));
        assert!(!child.is_root());
        assert_eq!(child.parent_id, Some(parent.id));
    }
}
