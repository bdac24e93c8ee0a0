//! Service implementations.

mod category_service_impl;
mod product_service_impl;

#[cfg(test)]
pub(crate) mod test_support;

pub use category_service_impl::CategoryServiceComponent;
pub use product_service_impl::ProductServiceComponent;
