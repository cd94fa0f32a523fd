//! API key value type

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque API key issued to a client on registration
///
/// Keys are random 128-bit identifiers rendered in the canonical hyphenated
/// UUID form (36 characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key value as presented by a caller
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Draw a fresh random key
    pub fn random() -> Self {
        Self::from(Uuid::new_v4())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short, log-safe prefix of the key
    pub fn prefix(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(idx, _)| idx)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl From<Uuid> for ApiKey {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.0
    }
}

impl Borrow<str> for ApiKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_key_is_canonical_uuid() {
        let key = ApiKey::random();

        assert_eq!(key.as_str().len(), 36);
        assert!(Uuid::parse_str(key.as_str()).is_ok());
        assert_eq!(key.as_str(), key.as_str().to_lowercase());
    }

    #[test]
    fn test_random_keys_differ() {
        assert_ne!(ApiKey::random(), ApiKey::random());
    }

    #[test]
    fn test_prefix() {
        let key = ApiKey::new("0123456789abcdef");
        assert_eq!(key.prefix(), "01234567");

        let short = ApiKey::new("abc");
        assert_eq!(short.prefix(), "abc");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let key = ApiKey::new("abc-123");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }
}
