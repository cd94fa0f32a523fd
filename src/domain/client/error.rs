//! Registration error types

use thiserror::Error;

use super::validation::ClientValidationError;
use crate::domain::DomainError;

/// Errors returned by a registration attempt
///
/// `InvalidName` and `InvalidEmail` are caller mistakes; `Store` carries a
/// collaborator failure through untouched.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{message}")]
    InvalidName { message: String },

    #[error("{message}")]
    InvalidEmail { message: String },

    #[error(transparent)]
    Store(#[from] DomainError),
}

impl RegistrationError {
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }

    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }
}

impl From<ClientValidationError> for RegistrationError {
    fn from(err: ClientValidationError) -> Self {
        if err.is_name_error() {
            Self::invalid_name(err.to_string())
        } else {
            Self::invalid_email(err.to_string())
        }
    }
}
