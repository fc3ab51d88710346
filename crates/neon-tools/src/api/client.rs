//! HTTP client for the Neon management API.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::auth::ApiKey;
use crate::config::NeonConfig;
use crate::error::ToolError;

use super::models::{
    Branch, CreateIdentityIntegrationRequest, Database, IdentityIntegrationKeys,
    IntegrationOutcome, ListBranchesResponse, ListDatabasesResponse,
};
use super::NeonApi;

/// HTTP client for the Neon management API.
///
/// Every operation issues exactly one request; there are no retries.
#[derive(Clone)]
pub struct NeonApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl NeonApiClient {
    /// Create a client from configuration.
    pub fn new(config: &NeonConfig) -> Result<Self, ToolError> {
        let api_key = ApiKey::new(&config.api_key)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl NeonApi for NeonApiClient {
    async fn list_project_branches(&self, project_id: &str) -> Result<Vec<Branch>, ToolError> {
        let url = format!("{}/projects/{}/branches", self.base_url, project_id);
        tracing::debug!(%project_id, "Listing project branches");

        let response = self.api_key.apply(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: ListBranchesResponse = response.json().await?;
        Ok(body.branches)
    }

    async fn list_branch_databases(
        &self,
        project_id: &str,
        branch_id: &str,
    ) -> Result<Vec<Database>, ToolError> {
        let url = format!(
            "{}/projects/{}/branches/{}/databases",
            self.base_url, project_id, branch_id
        );
        tracing::debug!(%project_id, %branch_id, "Listing branch databases");

        let response = self.api_key.apply(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: ListDatabasesResponse = response.json().await?;
        Ok(body.databases)
    }

    async fn create_identity_integration(
        &self,
        request: &CreateIdentityIntegrationRequest,
    ) -> Result<IntegrationOutcome, ToolError> {
        let url = format!("{}/projects/auth/create", self.base_url);
        tracing::debug!(
            project_id = %request.project_id,
            branch_id = %request.branch_id,
            database_name = %request.database_name,
            "Creating identity integration"
        );

        let response = self
            .api_key
            .apply(self.client.post(&url).json(request))
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => {
                let keys: IdentityIntegrationKeys = response.json().await?;
                Ok(IntegrationOutcome::Created(keys))
            }
            StatusCode::CONFLICT => Ok(IntegrationOutcome::AlreadyExists),
            status => Ok(IntegrationOutcome::Failed {
                status_text: status_text(status),
            }),
        }
    }
}

/// Convert a non-success listing response into an API error.
async fn api_error(response: reqwest::Response) -> ToolError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ToolError::Api { status, message }
}

/// Reason phrase for a status code, falling back to the numeric code.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url_normalization() {
        let client = NeonApiClient::new(&NeonConfig::new("test-key")).unwrap();
        assert_eq!(client.base_url, "https://console.neon.tech/api/v2");

        let mut config = NeonConfig::new("test-key");
        config.api_url = "https://console.neon.tech/api/v2/".to_string();
        let client = NeonApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://console.neon.tech/api/v2");
    }

    #[test]
    fn test_client_rejects_empty_api_key() {
        let result = NeonApiClient::new(&NeonConfig::new(""));
        assert!(matches!(result, Err(ToolError::Auth(_))));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        assert_eq!(status_text(StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "599");
    }
}
