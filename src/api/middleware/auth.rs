//! API key authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::ApiKey;

/// Extractor that requires an issued API key
///
/// The key is read from either:
/// - Authorization header: `Bearer <api_key>`
/// - X-API-Key header: `<api_key>`
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub ApiKey);

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = extract_api_key_from_headers(&parts.headers)?;

        debug!(key_prefix = %key.prefix(), "Validating API key");

        if !state.registrar.key_exists(key.as_str()).await {
            return Err(ApiError::unauthorized("Invalid API key"));
        }

        Ok(RequireApiKey(key))
    }
}

fn extract_api_key_from_headers(headers: &HeaderMap) -> Result<ApiKey, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(ApiKey::new(token.trim()));
        }
    }

    if let Some(api_key_header) = headers.get("x-api-key") {
        let key = api_key_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid X-API-Key header encoding"))?;

        return Ok(ApiKey::new(key.trim()));
    }

    Err(ApiError::unauthorized(
        "API key required. Provide via 'Authorization: Bearer <key>' or 'X-API-Key: <key>' header",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer 5f0c8a4e-1111-4c1e-9d2a-000000000001".parse().unwrap(),
        );

        let key = extract_api_key_from_headers(&headers).unwrap();
        assert_eq!(key.as_str(), "5f0c8a4e-1111-4c1e-9d2a-000000000001");
    }

    #[test]
    fn test_extract_x_api_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", " key-67890 ".parse().unwrap());

        let key = extract_api_key_from_headers(&headers).unwrap();
        assert_eq!(key.as_str(), "key-67890");
    }

    #[test]
    fn test_bearer_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer bearer-key".parse().unwrap());
        headers.insert("x-api-key", "header-key".parse().unwrap());

        let key = extract_api_key_from_headers(&headers).unwrap();
        assert_eq!(key.as_str(), "bearer-key");
    }

    #[test]
    fn test_missing_api_key() {
        let headers = HeaderMap::new();

        let err = extract_api_key_from_headers(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(extract_api_key_from_headers(&headers).is_err());
    }
}
