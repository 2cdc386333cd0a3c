//! One-shot catalog load performed when the product list first appears.
//!
//! A failed load is logged and yields an empty catalog. There is no retry.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::client::CatalogClient;
use crate::catalog::product::Product;

/// Fetch the catalog, falling back to an empty list on any error.
pub async fn load_catalog(client: &CatalogClient) -> Vec<Product> {
    match client.fetch_products().await {
        Ok(products) => {
            tracing::info!(product_count = products.len(), "Catalog loaded");
            products
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                error_type = err.error_type(),
                "Error fetching products"
            );
            Vec::new()
        }
    }
}

/// Run [`load_catalog`] on `handle` and hand the result to `deliver`.
///
/// The task is never cancelled. If the receiver behind `deliver` is gone the
/// result is simply dropped.
pub fn spawn_catalog_load<F>(handle: &Handle, client: CatalogClient, deliver: F) -> JoinHandle<()>
where
    F: FnOnce(Vec<Product>) + Send + 'static,
{
    handle.spawn(async move {
        let products = load_catalog(&client).await;
        deliver(products);
    })
}
