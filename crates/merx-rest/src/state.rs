//! Application state for Axum handlers.

use merx_service::{CategoryService, ProductService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub category_service: Arc<dyn CategoryService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        category_service: Arc<dyn CategoryService>,
    ) -> Self {
        Self {
            product_service,
            category_service,
        }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn ProductService> + HasComponent<dyn CategoryService>,
    {
        Self {
            product_service: module.resolve(),
            category_service: module.resolve(),
        }
    }
}
