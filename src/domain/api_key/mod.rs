//! API Key domain
//!
//! This module provides the API key value type together with the traits for
//! drawing new keys and caching the key-to-client mapping.

mod cache;
mod entity;
mod generator;

pub use cache::KeyCache;
pub use entity::ApiKey;
pub use generator::ApiKeyGenerator;
