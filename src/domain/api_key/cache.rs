//! Key cache trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::ApiKey;
use crate::domain::client::Client;

/// In-process mapping from issued API keys to the clients that own them
///
/// Entries live for the lifetime of the process; there is no eviction.
#[async_trait]
pub trait KeyCache: Send + Sync + Debug {
    /// Check whether a key has been issued
    async fn contains(&self, key: &str) -> bool;

    /// Get the client owning a key
    async fn get(&self, key: &str) -> Option<Client>;

    /// Record a key for a client, replacing any previous owner
    async fn insert(&self, key: ApiKey, client: Client);

    /// Snapshot of every issued key, in no particular order
    async fn keys(&self) -> Vec<ApiKey>;

    /// Number of issued keys
    async fn len(&self) -> usize;

    /// Whether no key has been issued yet
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
