//! Value objects for the Merx domain.

pub mod order_status;
pub mod role;

pub use order_status::*;
pub use role::*;
