//! API key generator trait

use std::fmt::Debug;

use super::entity::ApiKey;

/// Source of candidate API keys
///
/// Implementations only draw candidates; uniqueness against issued keys is
/// enforced by the registrar.
pub trait ApiKeyGenerator: Send + Sync + Debug {
    /// Draw a new candidate key
    fn generate(&self) -> ApiKey;
}
