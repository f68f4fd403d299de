#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("failed to fetch product catalog: {0}")]
    Fetch(reqwest::Error),
    #[error("product catalog source returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("failed to read product catalog body: {0}")]
    Body(reqwest::Error),
    #[error("failed to deserialize product catalog: {0}")]
    Deserialization(serde_json::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
