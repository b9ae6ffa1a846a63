//! Common types and traits for all catalogs

pub mod catalog_option;

// Re-exports
pub use catalog_option::{find_by_id, CatalogOption};
