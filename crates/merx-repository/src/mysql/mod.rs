//! MySQL repository implementations.

mod category_repository;
mod product_repository;

pub use category_repository::MySqlCategoryRepository;
pub use product_repository::MySqlProductRepository;
