//! Jobsearch client registration service
//!
//! Registers API clients and issues their keys:
//! - Name and email validation
//! - Client persistence behind a store trait
//! - Collision-free API key generation
//! - In-process key-to-client cache used to authenticate requests

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::api_key::{InMemoryKeyCache, UuidApiKeyGenerator};
use infrastructure::client::{ClientRegistrar, InMemoryClientStore};

/// Create the application state backed by in-memory collaborators
pub fn create_app_state() -> AppState {
    let store = Arc::new(InMemoryClientStore::new());
    let cache = Arc::new(InMemoryKeyCache::new());
    let generator = Arc::new(UuidApiKeyGenerator::new());

    let registrar = ClientRegistrar::new(store, cache, generator);

    AppState::new(Arc::new(registrar))
}
