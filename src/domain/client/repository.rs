//! Client store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Client;
use crate::domain::DomainError;

/// Persistence collaborator for client records
#[async_trait]
pub trait ClientStore: Send + Sync + Debug {
    /// Persist a new client
    async fn save(&self, client: Client) -> Result<Client, DomainError>;

    /// Get a client by email (exact match)
    async fn get_by_email(&self, email: &str) -> Result<Option<Client>, DomainError>;

    /// Check if a client with this email is already stored
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock client store for testing
    #[derive(Debug, Default)]
    pub struct MockClientStore {
        clients: Arc<RwLock<HashMap<String, Client>>>,
        should_fail: Arc<RwLock<bool>>,
        save_calls: Arc<RwLock<usize>>,
    }

    impl MockClientStore {
        /// Create a new mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of times `save` was invoked
        pub async fn save_calls(&self) -> usize {
            *self.save_calls.read().await
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock store configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ClientStore for MockClientStore {
        async fn save(&self, client: Client) -> Result<Client, DomainError> {
            *self.save_calls.write().await += 1;
            self.check_should_fail().await?;
            let mut clients = self.clients.write().await;
            clients.insert(client.email().to_string(), client.clone());
            Ok(client)
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<Client>, DomainError> {
            self.check_should_fail().await?;
            let clients = self.clients.read().await;
            Ok(clients.get(email).cloned())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_save_and_exists() {
            let store = MockClientStore::new();
            store
                .save(Client::new("Alice", "alice@example.com"))
                .await
                .unwrap();

            assert!(store.exists_by_email("alice@example.com").await.unwrap());
            assert!(!store.exists_by_email("bob@example.com").await.unwrap());
            assert_eq!(store.save_calls().await, 1);
        }

        #[tokio::test]
        async fn test_should_fail() {
            let store = MockClientStore::new();
            store.set_should_fail(true).await;

            assert!(store.save(Client::new("Alice", "alice@example.com")).await.is_err());
            assert_eq!(store.save_calls().await, 1);
            assert!(store.exists_by_email("alice@example.com").await.is_err());
        }
    }
}
