//! Neon Auth provisioning tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::{
    CreateIdentityIntegrationRequest, IdentityIntegrationKeys, IdentitySupportedAuthProvider,
    IntegrationOutcome, NeonApi,
};
use crate::error::ToolError;
use crate::registry::Tool;
use crate::result::CallToolResult;

/// Database name looked up before falling back to the first database.
const DEFAULT_DATABASE_NAME: &str = "neondb";

/// Provision Neon Auth for a project.
///
/// Resolves the project's default branch and database, then requests an
/// identity integration for them. The three calls are strictly sequential;
/// each depends on the previous response. Expected failure paths are
/// reported through the returned [`CallToolResult`]; only transport and
/// request-level API failures surface as `Err`.
pub async fn provision_neon_auth(
    api: &dyn NeonApi,
    project_id: &str,
) -> Result<CallToolResult, ToolError> {
    let branches = api.list_project_branches(project_id).await?;
    let branch = match branches
        .iter()
        .find(|branch| branch.default)
        .or_else(|| branches.first())
    {
        Some(branch) => branch,
        None => {
            tracing::warn!(%project_id, "Project has no branches");
            return Ok(CallToolResult::error(
                "The project has no default branch. Neon Auth can only be provisioned with a default branch.",
            ));
        }
    };
    tracing::debug!(%project_id, branch_id = %branch.id, "Selected branch");

    let databases = api.list_branch_databases(project_id, &branch.id).await?;
    let database = match databases
        .iter()
        .find(|database| database.name == DEFAULT_DATABASE_NAME)
        .or_else(|| databases.first())
    {
        Some(database) => database,
        None => {
            tracing::warn!(%project_id, branch_id = %branch.id, "Branch has no databases");
            return Ok(CallToolResult::error(
                "The project has no database. Neon Auth can only be provisioned with a database.",
            ));
        }
    };
    tracing::debug!(
        database_name = %database.name,
        role_name = %database.owner_name,
        "Selected database"
    );

    let request = CreateIdentityIntegrationRequest {
        auth_provider: IdentitySupportedAuthProvider::Stack,
        project_id: project_id.to_string(),
        branch_id: branch.id.clone(),
        database_name: database.name.clone(),
        role_name: database.owner_name.clone(),
    };

    match api.create_identity_integration(&request).await? {
        // An existing integration is not an error from the caller's
        // perspective.
        IntegrationOutcome::AlreadyExists => {
            tracing::info!(%project_id, "Neon Auth already provisioned");
            Ok(CallToolResult::text("Neon Auth already provisioned."))
        }
        IntegrationOutcome::Failed { status_text } => {
            tracing::warn!(%project_id, %status_text, "Identity integration creation failed");
            Ok(CallToolResult::error(format!(
                "Failed to provision Neon Auth. Error: {status_text}"
            )))
        }
        IntegrationOutcome::Created(keys) => {
            tracing::info!(%project_id, "Neon Auth provisioned");
            Ok(CallToolResult::text(env_block(&keys)).with_text(jwks_block(&keys)))
        }
    }
}

/// Environment variable block for a Next.js `.env.local` file.
fn env_block(keys: &IdentityIntegrationKeys) -> String {
    format!(
        "Authentication has been successfully provisioned for your Neon project. \
Following are the environment variables you need to set in your project:\n\
<code>\n\
NEXT_PUBLIC_STACK_PROJECT_ID='{}'\n\
NEXT_PUBLIC_STACK_PUBLISHABLE_CLIENT_KEY='{}'\n\
STACK_SECRET_SERVER_KEY='{}'\n\
</code>\n\n\
Copy the above environment variables and place them in your <code>.env.local</code> \
file for Next.js project. Note that variables with <code>NEXT_PUBLIC_</code> prefix \
will be available in the client side.",
        keys.auth_provider_project_id, keys.pub_client_key, keys.secret_server_key,
    )
}

/// JWKS URL block for verifying tokens issued by the provider.
fn jwks_block(keys: &IdentityIntegrationKeys) -> String {
    format!(
        "Use Following JWKS URL to retrieve the public key to verify the JSON Web Tokens (JWT) \
issued by authentication provider:\n\
<code title=\"jwks_url\" language=\"bash\">{}</code>",
        keys.jwks_url,
    )
}

/// Parameters for the Neon Auth provisioning tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionNeonAuthParams {
    /// Target project id.
    pub project_id: String,
}

/// Tool that provisions Neon Auth for a project.
pub struct ProvisionNeonAuthTool {
    api: Arc<dyn NeonApi>,
}

impl ProvisionNeonAuthTool {
    /// Create the tool over an API implementation.
    pub fn new(api: Arc<dyn NeonApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ProvisionNeonAuthTool {
    fn name(&self) -> &'static str {
        "provision_neon_auth"
    }

    fn description(&self) -> &'static str {
        "Provision Neon Auth (authentication) for a Neon project"
    }

    async fn call(&self, params: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let params: ProvisionNeonAuthParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParams(format!("provision_neon_auth: {e}")))?;
        provision_neon_auth(self.api.as_ref(), &params.project_id).await
    }
}
