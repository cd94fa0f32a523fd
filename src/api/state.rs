//! Application state for shared services

use std::sync::Arc;

use crate::domain::{ApiKey, ApiKeyGenerator, Client, ClientStore, KeyCache, RegistrationError};
use crate::infrastructure::client::{ClientRegistrar, RegisterClientRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<dyn ClientRegistrarTrait>,
}

impl AppState {
    pub fn new(registrar: Arc<dyn ClientRegistrarTrait>) -> Self {
        Self { registrar }
    }
}

/// Trait for client registration operations
#[async_trait::async_trait]
pub trait ClientRegistrarTrait: Send + Sync {
    async fn register(&self, request: RegisterClientRequest) -> Result<ApiKey, RegistrationError>;
    async fn key_exists(&self, key: &str) -> bool;
    async fn list_keys(&self) -> Vec<ApiKey>;
    async fn issued_key_count(&self) -> usize;
    async fn client_for_key(&self, key: &str) -> Option<Client>;
}

#[async_trait::async_trait]
impl<S, C, G> ClientRegistrarTrait for ClientRegistrar<S, C, G>
where
    S: ClientStore + 'static,
    C: KeyCache + 'static,
    G: ApiKeyGenerator + 'static,
{
    async fn register(&self, request: RegisterClientRequest) -> Result<ApiKey, RegistrationError> {
        ClientRegistrar::register(self, request).await
    }

    async fn key_exists(&self, key: &str) -> bool {
        ClientRegistrar::key_exists(self, key).await
    }

    async fn list_keys(&self) -> Vec<ApiKey> {
        ClientRegistrar::list_keys(self).await
    }

    async fn issued_key_count(&self) -> usize {
        ClientRegistrar::issued_key_count(self).await
    }

    async fn client_for_key(&self, key: &str) -> Option<Client> {
        ClientRegistrar::client_for_key(self, key).await
    }
}
