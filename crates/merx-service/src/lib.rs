//! # Merx Service
//!
//! Business logic service layer for the Merx commerce backend.
//! Contains use cases, DTOs, and the cache-consistency layer.

pub mod cache;
pub mod category_service;
pub mod dto;
pub mod product_service;
pub mod r#impl;

pub use cache::*;
pub use category_service::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::*;
