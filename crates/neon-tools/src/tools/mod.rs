//! Built-in provisioning tools.

pub mod provision_auth;

pub use provision_auth::{provision_neon_auth, ProvisionNeonAuthTool};
