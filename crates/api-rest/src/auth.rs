//! Header authentication middleware.

use api_shared::{validate_header_value, AuthError, AUTH_HEADER};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;

/// Reject requests whose [`AUTH_HEADER`] is missing or does not carry the configured key.
///
/// Runs before the handler, so a rejected request never reaches the catalog.
pub async fn require_header(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match check_header(req.headers(), &state.api_key) {
        Ok(()) => next.run(req).await,
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), "rejected request: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// A header that is present but not visible ASCII counts as an invalid value, not a missing one.
fn check_header(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    match headers.get(AUTH_HEADER).map(HeaderValue::to_str) {
        Some(Err(_)) => Err(AuthError::InvalidValue),
        provided => validate_header_value(provided.and_then(Result::ok), expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderName;

    fn headers_with(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::try_from(AUTH_HEADER).unwrap(), value);
        headers
    }

    #[test]
    fn test_check_header_accepts_containing_value() {
        let headers = headers_with(HeaderValue::from_static("key-123"));
        assert_eq!(check_header(&headers, "123"), Ok(()));
    }

    #[test]
    fn test_check_header_reports_absent_header_as_missing() {
        assert_eq!(
            check_header(&HeaderMap::new(), "123"),
            Err(AuthError::MissingHeader)
        );
    }

    #[test]
    fn test_check_header_reports_non_ascii_value_as_invalid() {
        let headers = headers_with(HeaderValue::from_bytes(b"123\xff").unwrap());
        assert_eq!(check_header(&headers, "123"), Err(AuthError::InvalidValue));
    }
}
