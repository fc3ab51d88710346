//! Neon management API surface.
//!
//! [`NeonApi`] is the seam between the provisioning tools and the transport:
//! tools depend on the trait, [`NeonApiClient`] implements it over HTTP.

pub mod client;
pub mod models;

pub use client::NeonApiClient;
pub use models::{
    Branch, CreateIdentityIntegrationRequest, Database, IdentityIntegrationKeys,
    IdentitySupportedAuthProvider, IntegrationOutcome,
};

use async_trait::async_trait;

use crate::error::ToolError;

/// Operations consumed from the Neon management API.
#[async_trait]
pub trait NeonApi: Send + Sync {
    /// List all branches of a project.
    async fn list_project_branches(&self, project_id: &str) -> Result<Vec<Branch>, ToolError>;

    /// List all databases of a branch.
    async fn list_branch_databases(
        &self,
        project_id: &str,
        branch_id: &str,
    ) -> Result<Vec<Database>, ToolError>;

    /// Create an identity integration for a project.
    async fn create_identity_integration(
        &self,
        request: &CreateIdentityIntegrationRequest,
    ) -> Result<IntegrationOutcome, ToolError>;
}
