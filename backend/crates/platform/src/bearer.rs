//! Bearer Credential Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Why a request carried no usable bearer credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Authorization header missing")]
    Missing,

    #[error("Authorization header malformed")]
    Malformed,
}

/// Extract the bearer token from headers
///
/// The scheme is matched case-insensitively. Multiple `Authorization`
/// headers are treated as malformed.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let mut values = headers.get_all(header::AUTHORIZATION).iter();
    let value = values.next().ok_or(BearerError::Missing)?;
    if values.next().is_some() {
        return Err(BearerError::Malformed);
    }

    let raw = value.to_str().map_err(|_| BearerError::Malformed)?.trim();
    let (scheme, token) = raw.split_once(' ').ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
