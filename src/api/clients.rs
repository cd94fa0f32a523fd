//! Client registration endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireApiKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Client;
use crate::infrastructure::client::RegisterClientRequest;

/// Registration request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientBody {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

impl From<RegisterClientBody> for RegisterClientRequest {
    fn from(body: RegisterClientBody) -> Self {
        Self {
            client_name: body.client_name,
            client_email: body.client_email,
        }
    }
}

/// Issued API key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}

/// Client details as seen by its key holder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub created_at: String,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id().to_string(),
            client_name: client.name().to_string(),
            client_email: client.email().to_string(),
            created_at: client.created_at().to_rfc3339(),
        }
    }
}

/// POST /clients
pub async fn register_client(
    State(state): State<AppState>,
    Json(body): Json<RegisterClientBody>,
) -> Result<Json<ApiKeyResponse>, ApiError> {
    debug!("Registering client");

    let api_key = state.registrar.register(body.into()).await?;

    Ok(Json(ApiKeyResponse {
        api_key: api_key.into(),
    }))
}

/// GET /clients/me
pub async fn current_client(
    State(state): State<AppState>,
    RequireApiKey(key): RequireApiKey,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = state
        .registrar
        .client_for_key(key.as_str())
        .await
        .ok_or_else(|| ApiError::not_found("No client owns this API key"))?;

    Ok(Json(ClientResponse::from(&client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_deserialization() {
        let json = r#"{"clientName": "Alice Smith", "clientEmail": "alice@example.com"}"#;

        let body: RegisterClientBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.client_name.as_deref(), Some("Alice Smith"));
        assert_eq!(body.client_email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_register_body_missing_fields() {
        let body: RegisterClientBody = serde_json::from_str("{}").unwrap();
        assert!(body.client_name.is_none());
        assert!(body.client_email.is_none());

        let body: RegisterClientBody =
            serde_json::from_str(r#"{"clientName": null, "clientEmail": "a@b.com"}"#).unwrap();
        assert!(body.client_name.is_none());
    }

    #[test]
    fn test_api_key_response_serialization() {
        let response = ApiKeyResponse {
            api_key: "abc".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"apiKey":"abc"}"#
        );
    }

    #[test]
    fn test_client_response_from_client() {
        let client = Client::new("Alice Smith", "alice@example.com");
        let response = ClientResponse::from(&client);

        assert_eq!(response.id, client.id().to_string());
        assert_eq!(response.client_name, "Alice Smith");
        assert_eq!(response.client_email, "alice@example.com");
    }
}
