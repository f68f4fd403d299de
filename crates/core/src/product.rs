//! Product catalog data model.
//!
//! Field names follow the remote catalog document, so the same types are used to decode the
//! upstream payload and to render the API response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An e-commerce product as published by the remote catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Title of the product.
    #[serde(default)]
    pub title: Option<String>,
    /// Price of the product.
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Available size labels, in catalog order.
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Declared sizes, or an empty slice when the catalog omits them.
    pub fn size_labels(&self) -> &[String] {
        self.sizes.as_deref().unwrap_or_default()
    }

    /// Description text, with an absent description read as empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Top-level shape of the remote catalog document.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// Summary of a filtered product set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsDetails {
    /// Lowest price in the set, zero when the set is empty.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub min_price: Decimal,
    /// Highest price in the set, zero when the set is empty.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub max_price: Decimal,
    /// Distinct sizes across the set, first-seen order.
    pub sizes: Vec<String>,
    /// Description tokens ranked 6th to 15th by frequency.
    pub common_words: Vec<String>,
}

/// Response body of the product search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSearchResult {
    pub products: Vec<Product>,
    pub details: ProductsDetails,
}
