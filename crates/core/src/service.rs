//! Product search pipeline.

use crate::details::summarize;
use crate::filter::filter_products;
use crate::highlight::highlight_products;
use crate::source::CatalogSource;
use crate::{CatalogResult, FilterCriteria, ProductSearchResult};
use std::sync::Arc;

/// Runs a product search against a catalog source.
///
/// Each call fetches the catalog afresh; nothing is shared between searches apart from the
/// source itself.
#[derive(Clone)]
pub struct ProductService {
    source: Arc<dyn CatalogSource>,
}

impl ProductService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch, filter, summarise, then highlight.
    ///
    /// Details are computed before highlighting so markup never counts as words, and
    /// highlighting only touches the filtered products.
    ///
    /// # Errors
    /// Returns the source's error if the catalog cannot be fetched or decoded.
    pub async fn search(&self, criteria: &FilterCriteria) -> CatalogResult<ProductSearchResult> {
        let catalog = self.source.fetch_products().await?;

        let filtered = filter_products(
            criteria.min_price,
            criteria.max_price,
            criteria.sizes.as_deref(),
            &catalog,
        );
        let details = summarize(&filtered);
        let products = highlight_products(criteria.highlight.as_deref(), &filtered);

        tracing::debug!(
            fetched = catalog.len(),
            matched = products.len(),
            "product search complete"
        );

        Ok(ProductSearchResult { products, details })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogError, Product, ProductsDetails};
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    struct StaticSource(Vec<Product>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::InvalidInput("upstream unavailable".into()))
        }
    }

    fn product(title: &str, price: i64, sizes: &[&str], description: &str) -> Product {
        Product {
            title: Some(title.into()),
            price: Decimal::from(price),
            sizes: Some(sizes.iter().map(|s| s.to_string()).collect()),
            description: Some(description.into()),
        }
    }

    fn service(products: Vec<Product>) -> ProductService {
        ProductService::new(Arc::new(StaticSource(products)))
    }

    #[tokio::test]
    async fn test_search_filters_then_highlights() {
        let svc = service(vec![
            product("Red Trouser", 15, &["medium"], "A green shirt pairs well."),
            product("Blue Trouser", 20, &["small"], "A green hat."),
        ]);
        let criteria = FilterCriteria::new()
            .with_min_price(Decimal::from(10))
            .with_max_price(Decimal::from(20))
            .with_sizes("medium")
            .with_highlight("green");

        let result = svc.search(&criteria).await.unwrap();

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].title.as_deref(), Some("Red Trouser"));
        assert_eq!(
            result.products[0].description.as_deref(),
            Some("A <em>green</em> shirt pairs well.")
        );
        assert_eq!(result.details.min_price, Decimal::from(15));
        assert_eq!(result.details.max_price, Decimal::from(15));
        assert_eq!(result.details.sizes, vec!["medium"]);
    }

    #[tokio::test]
    async fn test_search_details_ignore_highlight_markup() {
        // Six distinct words, so the sixth-ranked word is reported.
        let svc = service(vec![product("Shirt", 5, &[], "one two three four five em")]);

        let plain = svc.search(&FilterCriteria::new()).await.unwrap();
        let highlighted = svc
            .search(&FilterCriteria::new().with_highlight("one,two"))
            .await
            .unwrap();

        assert_eq!(plain.details.common_words, vec!["em"]);
        assert_eq!(highlighted.details, plain.details);
    }

    #[tokio::test]
    async fn test_search_no_match_returns_empty_defaults() {
        let svc = service(vec![product("Red Trouser", 25, &["medium"], "")]);
        let criteria = FilterCriteria::new().with_max_price(Decimal::from(20));

        let result = svc.search(&criteria).await.unwrap();

        assert!(result.products.is_empty());
        assert_eq!(result.details, ProductsDetails::default());
    }

    #[tokio::test]
    async fn test_search_propagates_source_error() {
        let svc = ProductService::new(Arc::new(FailingSource));

        let result = svc.search(&FilterCriteria::new()).await;

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }
}
