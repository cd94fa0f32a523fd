//! In-memory key cache implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::api_key::{ApiKey, KeyCache};
use crate::domain::client::Client;

/// In-memory implementation of KeyCache
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyCache {
    entries: Arc<RwLock<HashMap<ApiKey, Client>>>,
}

impl InMemoryKeyCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyCache for InMemoryKeyCache {
    async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    async fn get(&self, key: &str) -> Option<Client> {
        self.entries.read().await.get(key).cloned()
    }

    async fn insert(&self, key: ApiKey, client: Client) {
        self.entries.write().await.insert(key, client);
    }

    async fn keys(&self) -> Vec<ApiKey> {
        self.entries.read().await.keys().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
