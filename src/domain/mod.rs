//! Domain layer - entities, validation rules and collaborator traits

pub mod api_key;
pub mod client;
pub mod error;

pub use api_key::{ApiKey, ApiKeyGenerator, KeyCache};
pub use client::{Client, ClientStore, ClientValidationError, RegistrationError};
pub use error::DomainError;
