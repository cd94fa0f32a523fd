//! API Key infrastructure implementations
//!
//! This module provides the random key generator and the in-memory
//! key-to-client cache.

mod cache;
mod generator;

pub use cache::InMemoryKeyCache;
pub use generator::UuidApiKeyGenerator;
