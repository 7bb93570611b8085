// Standalone MCP server binary

use anyhow::{Context, Result};
use documize_mcp::server::McpServer;
use documize_mcp::tools::*;
use documize_sdk::client::{ENV_API_CREDENTIALS, ENV_API_URL};
use documize_sdk::DocumizeClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr: stdout is reserved for MCP messages.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Documize MCP server starting...");

    let client = Arc::new(DocumizeClient::from_env().with_context(|| {
        format!(
            "{ENV_API_URL} and {ENV_API_CREDENTIALS} must be set; \
             {ENV_API_CREDENTIALS} is the Base64 encoding of 'orgId:email:password' \
             (e.g. echo -n 'demo:api@example.org:secret' | base64)"
        )
    })?);

    let mut registry = ToolRegistry::new();

    // Space tools
    registry.register(Arc::new(ListSpacesTool::new(client.clone())));
    registry.register(Arc::new(GetSpaceTool::new(client.clone())));
    registry.register(Arc::new(CreateSpaceTool::new(client.clone())));
    registry.register(Arc::new(DeleteSpaceTool::new(client.clone())));

    // Document and page tools
    registry.register(Arc::new(ListDocumentsTool::new(client.clone())));
    registry.register(Arc::new(GetDocumentTool::new(client.clone())));
    registry.register(Arc::new(UpdateDocumentTool::new(client.clone())));
    registry.register(Arc::new(DeleteDocumentTool::new(client.clone())));
    registry.register(Arc::new(ListPagesTool::new(client.clone())));
    registry.register(Arc::new(GetPageTool::new(client.clone())));
    registry.register(Arc::new(CreatePageTool::new(client.clone())));
    registry.register(Arc::new(UpdatePageTool::new(client.clone())));
    registry.register(Arc::new(DeletePageTool::new(client.clone())));

    // Category tools
    registry.register(Arc::new(ListCategoriesTool::new(client.clone())));
    registry.register(Arc::new(CreateCategoryTool::new(client.clone())));

    // User and group tools
    registry.register(Arc::new(ListUsersTool::new(client.clone())));
    registry.register(Arc::new(CreateUserTool::new(client.clone())));
    registry.register(Arc::new(DeleteUserTool::new(client.clone())));
    registry.register(Arc::new(ListGroupsTool::new(client.clone())));
    registry.register(Arc::new(JoinGroupTool::new(client.clone())));
    registry.register(Arc::new(LeaveGroupTool::new(client.clone())));

    // Search, import and export tools
    registry.register(Arc::new(SearchTool::new(client.clone())));
    registry.register(Arc::new(ImportDocumentTool::new(client.clone())));
    registry.register(Arc::new(ExportDocumentsTool::new(client.clone())));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    server.run().await?;

    Ok(())
}
