//! Neon provisioning command line tool.
//!
//! Drives the provisioning tools against the Neon management API.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neon_tools::tools::ProvisionNeonAuthTool;
use neon_tools::{CallToolResult, Content, NeonApiClient, NeonConfig, ToolRegistry};

#[derive(Parser)]
#[command(name = "neonctl")]
#[command(version, about = "Neon provisioning command line tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision Neon Auth for a project
    ProvisionAuth {
        /// Target project id
        #[arg(long)]
        project_id: String,
    },
    /// List available tools
    Tools,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = NeonConfig::from_env().context("failed to load Neon API configuration")?;
    let api = Arc::new(NeonApiClient::new(&config)?);

    let mut registry = ToolRegistry::new();
    registry.register(ProvisionNeonAuthTool::new(api));

    match cli.command {
        Commands::Tools => {
            for name in registry.list() {
                if let Some(tool) = registry.get(name) {
                    println!("{:<24} {}", name, tool.description());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::ProvisionAuth { project_id } => {
            tracing::info!(%project_id, "Provisioning Neon Auth");
            let result = registry
                .call(
                    "provision_neon_auth",
                    serde_json::json!({ "projectId": project_id }),
                )
                .await?;
            Ok(print_result(&result))
        }
    }
}

/// Print each content block and map the error flag to an exit code.
fn print_result(result: &CallToolResult) -> ExitCode {
    for content in &result.content {
        let Content::Text { text } = content;
        println!("{text}");
        println!();
    }

    if result.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
