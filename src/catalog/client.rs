use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use crate::catalog::error::CatalogError;
use crate::catalog::product::Product;
use crate::config::CatalogConfig;

/// HTTP client for the product catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| CatalogError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;
        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .user_agent(concat!("shopterm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Single unauthenticated GET of the whole product collection.
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let start = Instant::now();
        tracing::debug!("Fetching catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Catalog fetch failed"
            );
            return Err(CatalogError::UpstreamError {
                status: status.as_u16(),
            });
        }

        let products = response.json::<Vec<Product>>().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                CatalogError::Decode(e)
            }
        })?;

        tracing::debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            product_count = products.len(),
            "Catalog fetched"
        );
        Ok(products)
    }

    fn request_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            return self.timeout_error();
        }
        CatalogError::Connection {
            endpoint: self.endpoint.to_string(),
            source: err,
        }
    }

    fn timeout_error(&self) -> CatalogError {
        CatalogError::Timeout {
            duration: self.timeout.as_secs(),
        }
    }
}
