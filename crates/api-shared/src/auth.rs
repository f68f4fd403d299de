/// Header every product request must carry.
pub const AUTH_HEADER: &str = "X-SWS-Header";

/// Why a request failed header authentication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing or invalid header value.")]
    MissingHeader,
    #[error("Missing or invalid header value.")]
    InvalidValue,
}

/// Validates the value of [`AUTH_HEADER`] against the configured expected value.
///
/// The check is a literal substring match: the header passes when its value contains
/// `expected`. A missing header is rejected.
pub fn validate_header_value(provided: Option<&str>, expected: &str) -> Result<(), AuthError> {
    let provided = provided.ok_or(AuthError::MissingHeader)?;

    if provided.contains(expected) {
        Ok(())
    } else {
        Err(AuthError::InvalidValue)
    }
}
