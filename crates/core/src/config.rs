//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables.

use crate::constants::{
    DEFAULT_API_KEY, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_REST_ADDR, DEFAULT_SOURCE_URL,
};
use crate::{CatalogError, CatalogResult};
use std::time::Duration;

/// Environment variable holding the REST listen address.
pub const ENV_REST_ADDR: &str = "CATALOG_REST_ADDR";
/// Environment variable holding the remote catalog URL.
pub const ENV_SOURCE_URL: &str = "CATALOG_SOURCE_URL";
/// Environment variable holding the outbound request timeout in seconds.
pub const ENV_FETCH_TIMEOUT_SECS: &str = "CATALOG_FETCH_TIMEOUT_SECS";
/// Environment variable holding the expected authentication header value.
pub const ENV_API_KEY: &str = "CATALOG_API_KEY";
/// Environment variable toggling the Swagger UI.
pub const ENV_ENABLE_SWAGGER: &str = "CATALOG_ENABLE_SWAGGER";

/// Catalog configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    rest_addr: String,
    source_url: String,
    fetch_timeout: Duration,
    api_key: String,
    enable_swagger: bool,
}

impl CatalogConfig {
    /// Create a new `CatalogConfig`.
    pub fn new(
        rest_addr: String,
        source_url: String,
        fetch_timeout: Duration,
        api_key: String,
        enable_swagger: bool,
    ) -> CatalogResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "rest_addr cannot be empty".into(),
            ));
        }
        if source_url.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "source_url cannot be empty".into(),
            ));
        }
        if fetch_timeout.is_zero() {
            return Err(CatalogError::InvalidInput(
                "fetch_timeout must be greater than zero".into(),
            ));
        }
        if api_key.is_empty() {
            return Err(CatalogError::InvalidInput("api_key cannot be empty".into()));
        }

        Ok(Self {
            rest_addr,
            source_url,
            fetch_timeout,
            api_key,
            enable_swagger,
        })
    }

    /// Resolve the configuration from process environment variables.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    ///
    /// Missing or blank values fall back to the defaults in [`crate::constants`].
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self::new(
            value(ENV_REST_ADDR).unwrap_or_else(|| DEFAULT_REST_ADDR.into()),
            value(ENV_SOURCE_URL).unwrap_or_else(|| DEFAULT_SOURCE_URL.into()),
            fetch_timeout_from_env_value(value(ENV_FETCH_TIMEOUT_SECS))?,
            value(ENV_API_KEY).unwrap_or_else(|| DEFAULT_API_KEY.into()),
            flag_from_env_value(ENV_ENABLE_SWAGGER, value(ENV_ENABLE_SWAGGER), true)?,
        )
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn enable_swagger(&self) -> bool {
        self.enable_swagger
    }
}

/// Parse the outbound fetch timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn fetch_timeout_from_env_value(value: Option<String>) -> CatalogResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let secs = match value {
        Some(v) => v.parse::<u64>().map_err(|_| {
            CatalogError::InvalidInput(format!(
                "{ENV_FETCH_TIMEOUT_SECS} must be a whole number of seconds, got {v:?}"
            ))
        })?,
        None => DEFAULT_FETCH_TIMEOUT_SECS,
    };

    if secs == 0 {
        return Err(CatalogError::InvalidInput(format!(
            "{ENV_FETCH_TIMEOUT_SECS} must be greater than zero"
        )));
    }

    Ok(Duration::from_secs(secs))
}

/// Parse a boolean toggle from an optional string value.
///
/// Accepts `true`/`false`/`1`/`0` (case-insensitive); `None` yields `default`.
pub fn flag_from_env_value(name: &str, value: Option<String>, default: bool) -> CatalogResult<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(CatalogError::InvalidInput(format!(
            "{name} must be true or false, got {v:?}"
        ))),
    }
}
