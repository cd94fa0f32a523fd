//! API Key generation
//!
//! Draws random version 4 UUIDs as API keys.

use crate::domain::api_key::{ApiKey, ApiKeyGenerator};

/// Generator producing random UUID keys
#[derive(Debug, Clone, Default)]
pub struct UuidApiKeyGenerator;

impl UuidApiKeyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ApiKeyGenerator for UuidApiKeyGenerator {
    fn generate(&self) -> ApiKey {
        ApiKey::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_key() {
        let generator = UuidApiKeyGenerator::new();
        let key = generator.generate();

        assert_eq!(key.as_str().len(), 36);
        assert_eq!(key.as_str().matches('-').count(), 4);
    }

    #[test]
    fn test_key_uniqueness() {
        let generator = UuidApiKeyGenerator::new();
        let keys: HashSet<ApiKey> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(keys.len(), 1000);
    }
}
