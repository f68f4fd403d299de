use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use catalog_core::CatalogConfig;

/// Main entry point for the product catalog service
///
/// Starts the REST server on the configured address (default: 0.0.0.0:3000).
///
/// The product endpoint requires the `X-SWS-Header` header to carry the configured key.
///
/// # Environment Variables
/// - `CATALOG_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CATALOG_SOURCE_URL`: Remote product catalog document
/// - `CATALOG_FETCH_TIMEOUT_SECS`: Outbound request timeout (default: 10)
/// - `CATALOG_API_KEY`: Expected header value (default: "123")
/// - `CATALOG_ENABLE_SWAGGER`: Serve Swagger UI and the OpenAPI document (default: true)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_run=info".parse()?)
                .add_directive("catalog_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CatalogConfig::from_env()?;

    tracing::info!("++ Starting catalog REST on {}", cfg.rest_addr());
    tracing::info!("++ Catalog source {}", cfg.source_url());
    if cfg.enable_swagger() {
        tracing::info!("Swagger UI enabled at /swagger-ui");
    } else {
        tracing::info!("Swagger UI disabled");
    }

    let state = AppState::from_config(&cfg)?;
    let app = api_rest::router(state, cfg.enable_swagger());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
