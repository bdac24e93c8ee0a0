//! # Merx Server
//!
//! Server binary support: dependency injection wiring and startup helpers.

pub mod di;
pub mod startup;
