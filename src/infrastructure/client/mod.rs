//! Client infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryClientStore;
pub use service::{ClientRegistrar, RegisterClientRequest};
