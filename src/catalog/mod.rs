//! Product catalog: wire model, HTTP client, one-shot loader and filters.

pub mod client;
pub mod error;
pub mod filter;
pub mod loader;
pub mod product;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use filter::{filter_by_category, search_by_title};
pub use loader::{load_catalog, spawn_catalog_load};
pub use product::{Category, Product, CATEGORIES};
