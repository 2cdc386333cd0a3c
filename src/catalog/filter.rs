//! Derived views over the full catalog.
//!
//! Both filters start from the full list. Neither one looks at the other's
//! current selection.

use crate::catalog::product::{Category, Product};

/// Products whose title contains `query`, ignoring case.
///
/// An empty query returns the whole catalog.
pub fn search_by_title(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Products belonging to `category`. `Category::All` returns everything.
pub fn filter_by_category(products: &[Product], category: Category) -> Vec<Product> {
    products
        .iter()
        .filter(|product| category.matches(product))
        .cloned()
        .collect()
}
