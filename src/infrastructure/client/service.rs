//! Client registration service

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::api_key::{ApiKey, ApiKeyGenerator, KeyCache};
use crate::domain::client::{
    validate_client_name, validate_email_format, validate_email_presence, Client,
    ClientStore, ClientValidationError, RegistrationError,
};

/// Request for registering a new client
///
/// Fields are optional so that absent input is reported as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct RegisterClientRequest {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

impl RegisterClientRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            client_name: Some(name.into()),
            client_email: Some(email.into()),
        }
    }
}

/// Registers clients and issues their API keys
#[derive(Debug)]
pub struct ClientRegistrar<S: ClientStore, C: KeyCache, G: ApiKeyGenerator> {
    store: Arc<S>,
    cache: Arc<C>,
    generator: Arc<G>,
    /// Held across uniqueness check, save, key generation and cache insert
    registration_lock: Mutex<()>,
}

impl<S: ClientStore, C: KeyCache, G: ApiKeyGenerator> ClientRegistrar<S, C, G> {
    /// Create a new registrar
    pub fn new(store: Arc<S>, cache: Arc<C>, generator: Arc<G>) -> Self {
        Self {
            store,
            cache,
            generator,
            registration_lock: Mutex::new(()),
        }
    }

    /// Register a client and return its newly issued API key
    ///
    /// The name is validated before the email. For the email, presence is
    /// checked first, then uniqueness against the store, then its format.
    pub async fn register(
        &self,
        request: RegisterClientRequest,
    ) -> Result<ApiKey, RegistrationError> {
        let name = validate_client_name(request.client_name.as_deref())?;
        let email = validate_email_presence(request.client_email.as_deref())?;

        let _guard = self.registration_lock.lock().await;

        if self.store.exists_by_email(email).await? {
            return Err(ClientValidationError::EmailAlreadyRegistered.into());
        }

        validate_email_format(email)?;

        let client = self.store.save(Client::new(name, email)).await?;
        let api_key = self.generate_api_key().await;
        self.cache.insert(api_key.clone(), client.clone()).await;

        info!(
            client_id = %client.id(),
            key_prefix = %api_key.prefix(),
            "Registered client"
        );

        let issued = self.list_keys().await;
        debug!(
            count = issued.len(),
            keys = ?issued.iter().map(ApiKey::prefix).collect::<Vec<_>>(),
            "Issued API keys"
        );

        Ok(api_key)
    }

    /// Check whether a key has been issued
    pub async fn key_exists(&self, key: &str) -> bool {
        self.cache.contains(key).await
    }

    /// Snapshot of all issued keys
    pub async fn list_keys(&self) -> Vec<ApiKey> {
        self.cache.keys().await
    }

    /// Number of issued keys
    pub async fn issued_key_count(&self) -> usize {
        self.cache.len().await
    }

    /// Record a key obtained outside of `register`
    pub async fn add_api_key(&self, key: ApiKey, client: Client) {
        let _guard = self.registration_lock.lock().await;
        self.cache.insert(key, client).await;
    }

    /// Look up the client that owns a key
    pub async fn client_for_key(&self, key: &str) -> Option<Client> {
        self.cache.get(key).await
    }

    async fn generate_api_key(&self) -> ApiKey {
        let mut candidate = self.generator.generate();

        while self.key_exists(candidate.as_str()).await {
            warn!(
                key_prefix = %candidate.prefix(),
                "Generated API key collides with an issued key, drawing again"
            );
            candidate = self.generator.generate();
        }

        candidate
    }
}
