//! Infrastructure layer - Collaborator implementations

pub mod api_key;
pub mod client;
pub mod logging;
