//! Remote product catalog sources.
//!
//! [`CatalogSource`] is the capability the product service depends on. The HTTP implementation
//! performs exactly one GET per call: no caching, no retries. Tests substitute their own
//! implementation.

use crate::product::CatalogDocument;
use crate::{CatalogError, CatalogResult, Product};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Something that can produce the current product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;
}

/// Fetches the catalog document from a fixed URL.
#[derive(Clone, Debug)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Build a source for `url` whose requests fail after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::ClientBuild)?;
        Ok(Self::with_client(client, url))
    }

    /// Build a source around an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> CatalogResult<String> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(CatalogError::Fetch)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus(status));
        }

        tracing::info!("product catalog fetched at {}", chrono::Utc::now().to_rfc3339());
        resp.text().await.map_err(CatalogError::Body)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let result = match self.fetch_body().await {
            Ok(body) => {
                tracing::debug!(payload = %body, "product catalog payload");
                decode_catalog(&body)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(products) => {
                tracing::info!("fetched {} products", products.len());
                Ok(products)
            }
            Err(e) => {
                tracing::error!(url = %self.url, "unable to fetch the product catalog: {}", e);
                Err(e)
            }
        }
    }
}

/// Decode a catalog document body.
///
/// A document without a `products` array decodes to an empty catalog.
pub fn decode_catalog(body: &str) -> CatalogResult<Vec<Product>> {
    let doc: CatalogDocument =
        serde_json::from_str(body).map_err(CatalogError::Deserialization)?;
    Ok(doc.products.unwrap_or_default())
}
