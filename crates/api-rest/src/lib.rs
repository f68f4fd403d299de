//! # API REST
//!
//! REST API implementation for the product catalog.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Header authentication in front of the product endpoint
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing)
//!
//! Uses `api-shared` for header validation and health types, and `catalog-core` for the
//! search pipeline.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService};
use catalog_core::{
    CatalogConfig, CatalogResult, CatalogSource, HttpCatalogSource, Product,
    ProductSearchResult, ProductService, ProductsDetails,
};

pub mod auth;
pub mod products;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            product_service: ProductService::new(source),
            api_key: api_key.into(),
        }
    }

    /// Build the state for a running server: an HTTP catalog source for the configured URL.
    pub fn from_config(cfg: &CatalogConfig) -> CatalogResult<Self> {
        let source = HttpCatalogSource::new(cfg.source_url(), cfg.fetch_timeout())?;
        Ok(Self::new(Arc::new(source), cfg.api_key()))
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "SWS Demo API", version = "v1"),
    paths(health, products::get_products),
    components(schemas(HealthRes, Product, ProductsDetails, ProductSearchResult))
)]
pub struct ApiDoc;

/// Assemble the REST router.
///
/// `/health` is open; `/api/product` requires the authentication header. Swagger UI is served
/// at `/swagger-ui` with the document at `/api-docs/openapi.json` when `enable_swagger` is set.
pub fn router(state: AppState, enable_swagger: bool) -> Router {
    let product_routes = Router::new()
        .route("/api/product", get(products::get_products))
        .route_layer(from_fn_with_state(state.clone(), auth::require_header));

    let mut app = Router::new()
        .route("/health", get(health))
        .merge(product_routes);

    if enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports liveness without contacting the remote catalog.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}
