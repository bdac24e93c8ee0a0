//! # Merx REST
//!
//! REST API layer using Axum for the Merx commerce backend.
//! Provides HTTP endpoints for product and category management plus
//! health checks and Swagger UI.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
