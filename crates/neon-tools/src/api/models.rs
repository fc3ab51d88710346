//! Data models for Neon management API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A branch of a Neon project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this branch is the project's default branch.
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A logical database within a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    /// Role that owns the database.
    pub owner_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response body of the branch listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListBranchesResponse {
    pub branches: Vec<Branch>,
}

/// Response body of the database listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListDatabasesResponse {
    pub databases: Vec<Database>,
}

/// Authentication providers supported for identity integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdentitySupportedAuthProvider {
    /// Stack Auth.
    #[default]
    Stack,
}

/// Request body for creating an identity integration.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIdentityIntegrationRequest {
    pub auth_provider: IdentitySupportedAuthProvider,
    pub project_id: String,
    pub branch_id: String,
    pub database_name: String,
    pub role_name: String,
}

/// Credentials returned when an identity integration is created.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityIntegrationKeys {
    /// Project id on the authentication provider's side.
    pub auth_provider_project_id: String,
    /// Publishable client key (safe to expose client-side).
    pub pub_client_key: String,
    /// Secret server key.
    pub secret_server_key: String,
    /// Endpoint exposing the public keys that verify issued tokens.
    pub jwks_url: String,
}

/// Outcome of an identity integration creation call, derived from the
/// response status.
#[derive(Debug, Clone)]
pub enum IntegrationOutcome {
    /// Integration created (201).
    Created(IdentityIntegrationKeys),
    /// An integration already exists for the project (409).
    AlreadyExists,
    /// Any other status.
    Failed { status_text: String },
}
