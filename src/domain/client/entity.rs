//! Client entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered client of the job search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier assigned at registration
    id: Uuid,
    /// Display name, at most 100 characters
    name: String,
    /// Contact email, unique across all stored clients
    email: String,
    /// When the client registered
    created_at: DateTime<Utc>,
}

impl Client {
    /// Create a new client with a fresh identifier
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = Client::new("Alice Smith", "alice@example.com");

        assert_eq!(client.name(), "Alice Smith");
        assert_eq!(client.email(), "alice@example.com");
        assert!(client.created_at() <= Utc::now());
    }

    #[test]
    fn test_clients_get_distinct_ids() {
        let first = Client::new("Alice", "alice@example.com");
        let second = Client::new("Alice", "alice@example.com");

        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }
}
