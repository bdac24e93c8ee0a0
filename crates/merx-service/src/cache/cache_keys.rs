//! Cache key generators for consistent key naming.
//!
//! Keys are deterministic per entity and lookup: two requests for the same
//! logical read always compute the same key. Search keys are built from the
//! normalized query so equivalent queries share one entry.

/// Entity segment for product keys.
pub const PRODUCT: &str = "product";

/// Entity segment for category keys.
pub const CATEGORY: &str = "category";

/// Key for the full listing of an entity.
#[must_use]
pub fn all(entity: &str) -> String {
    format!("{}:all", entity)
}

/// Key for a single record by ID.
#[must_use]
pub fn by_id(entity: &str, id: impl std::fmt::Display) -> String {
    format!("{}:byId:{}", entity, id)
}

/// Key for a category-scoped listing.
#[must_use]
pub fn by_category(entity: &str, category_id: impl std::fmt::Display) -> String {
    format!("{}:category:{}", entity, category_id)
}

/// Normalizes a raw search query: trimmed and lowercased.
///
/// Shared by the key builder and the repository query path so the cache key
/// and the executed query always agree.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Key for a search result set, built from the normalized query.
#[must_use]
pub fn search(entity: &str, raw_query: &str) -> String {
    format!("{}:search:{}", entity, normalize_query(raw_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_core::ProductId;

    #[test]
    fn test_all_key() {
        assert_eq!(all(PRODUCT), "product:all");
        assert_eq!(all(CATEGORY), "category:all");
    }

    #[test]
    fn test_by_id_key() {
        let id = ProductId::new();
        assert_eq!(by_id(PRODUCT, id), format!("product:byId:{}", id));
    }

    #[test]
    fn test_search_key_ignores_case_and_whitespace() {
        assert_eq!(search(PRODUCT, "  LapTop  "), search(PRODUCT, "laptop"));
        assert_eq!(search(PRODUCT, "\tTV\n"), "product:search:tv");
    }

    #[test]
    fn test_distinct_queries_get_distinct_keys() {
        assert_ne!(search(PRODUCT, "laptop"), search(PRODUCT, "desktop"));
        assert_ne!(search(PRODUCT, "tv"), search(CATEGORY, "tv"));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Gaming Mouse "), "gaming mouse");
        assert_eq!(normalize_query("   "), "");
    }
}
