//! In-memory client store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::client::{Client, ClientStore};
use crate::domain::DomainError;

/// In-memory implementation of ClientStore, keyed by email
#[derive(Debug)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<String, Client>>>,
}

impl InMemoryClientStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn save(&self, client: Client) -> Result<Client, DomainError> {
        let mut clients = self.clients.write().await;
        let email = client.email().to_string();

        if clients.contains_key(&email) {
            return Err(DomainError::conflict(format!(
                "Client with email '{}' already exists",
                email
            )));
        }

        clients.insert(email, client.clone());

        Ok(client)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get() {
        let store = InMemoryClientStore::new();
        let client = Client::new("Alice", "alice@example.com");

        store.save(client.clone()).await.unwrap();

        let retrieved = store.get_by_email("alice@example.com").await.unwrap();
        assert_eq!(retrieved, Some(client));
    }

    #[tokio::test]
    async fn test_exists_by_email_is_exact_match() {
        let store = InMemoryClientStore::new();
        store
            .save(Client::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert!(store.exists_by_email("alice@example.com").await.unwrap());
        assert!(!store.exists_by_email("Alice@example.com").await.unwrap());
        assert!(!store.exists_by_email("bob@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryClientStore::new();
        store
            .save(Client::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        let result = store
            .save(Client::new("Alice Again", "alice@example.com"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let kept = store.get_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(kept.name(), "Alice");
    }
}
