use thiserror::Error;

/// Errors from fetching the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog request timed out after {duration}s")]
    Timeout { duration: u64 },

    #[error("Catalog endpoint returned HTTP {status}")]
    UpstreamError { status: u16 },

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl CatalogError {
    /// Short tag for structured log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::InvalidEndpoint { .. } => "invalid_endpoint",
            CatalogError::ClientBuild(_) => "client_build",
            CatalogError::Connection { .. } => "connection_error",
            CatalogError::Timeout { .. } => "timeout",
            CatalogError::UpstreamError { .. } => "upstream_error",
            CatalogError::Decode(_) => "decode_error",
        }
    }
}
