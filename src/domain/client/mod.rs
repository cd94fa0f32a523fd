//! Client domain
//!
//! This module provides the client entity, the registration validation
//! rules, and the store trait that persists registered clients.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::Client;
pub use error::RegistrationError;
pub use repository::ClientStore;
pub use validation::{
    has_consecutive_special_characters, validate_client_name, validate_email_format,
    validate_email_presence, ClientValidationError, MAX_CLIENT_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockClientStore;
