//! Product search endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use catalog_core::{Decimal, FilterCriteria, ProductSearchResult};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::AppState;

/// Optional query parameters of `GET /api/product`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Minimum price, inclusive.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[param(value_type = Option<f64>)]
    pub minprice: Option<Decimal>,
    /// Maximum price, inclusive.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[param(value_type = Option<f64>)]
    pub maxprice: Option<Decimal>,
    /// Comma-separated list of sizes; matches any, case-insensitively.
    pub size: Option<String>,
    /// Comma-separated list of words to highlight in descriptions.
    pub highlight: Option<String>,
}

impl From<ProductQuery> for FilterCriteria {
    fn from(query: ProductQuery) -> Self {
        FilterCriteria {
            min_price: query.minprice,
            max_price: query.maxprice,
            sizes: query.size,
            highlight: query.highlight,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[utoipa::path(
    get,
    path = "/api/product",
    params(
        ProductQuery,
        ("X-SWS-Header" = String, Header, description = "This header is required for authentication to validate the request.")
    ),
    responses(
        (status = 200, description = "Filtered and highlighted products with summary details", body = ProductSearchResult),
        (status = 400, description = "Missing or invalid header value, or malformed query"),
        (status = 500, description = "Product catalog could not be fetched")
    )
)]
/// Search the product catalog
///
/// Fetches the catalog, keeps the products within the optional price bounds and size list,
/// summarises them, and highlights the requested words in their descriptions.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - the remote catalog cannot be fetched or decoded.
#[axum::debug_handler]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductSearchResult>, (StatusCode, &'static str)> {
    let criteria = FilterCriteria::from(query);

    match state.product_service.search(&criteria).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("Product search error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
