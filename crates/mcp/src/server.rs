// MCP server: newline-delimited JSON-RPC 2.0 over stdio.
//
// stdin carries requests, stdout carries responses (one JSON document per
// line, no embedded newlines), stderr is free for logging.

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability, MCP_PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Server name advertised during the initialize handshake.
pub const SERVER_NAME: &str = "documize-mcp";

/// MCP server dispatching tool calls against a registry.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("MCP server ready on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(&line).await else {
                continue;
            };

            let json = serde_json::to_string(&response)?;
            stdout.write_all(json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one incoming line. Returns `None` for notifications, which get
    /// no response.
    async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "failed to parse incoming message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        debug!(method = %request.method, "handling request");
        Some(match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => debug!("client completed initialization"),
            method => debug!(method = %method, "ignoring notification"),
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        JsonRpcResponse::success(id, result)
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.registry.list_schemas(),
        };
        JsonRpcResponse::success(id, result)
    }

    async fn handle_tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(err)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("invalid tools/call params: {err}")),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("missing tools/call params"),
                )
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("unknown tool: {}", params.name)),
            );
        };

        match tool.execute(params.arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => {
                warn!(tool = %params.name, error = %err, "tool execution failed");
                JsonRpcResponse::error(
                    id,
                    JsonRpcError::internal_error(format!("tool execution failed: {err:#}")),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
    use crate::tools::{json_schema_object, json_schema_string, Tool};
    use serde_json::json;
    use std::sync::Arc;

    struct EchoTool;

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: "Echo the message back".to_string(),
                input_schema: json_schema_object(
                    json!({ "message": json_schema_string("The message") }),
                    vec!["message"],
                ),
            }
        }

        async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
            let message = arguments["message"]
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("missing message"))?;
            Ok(CallToolResult {
                content: vec![ToolContent::text(message)],
                is_error: None,
            })
        }
    }

    fn server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        McpServer::new(registry)
    }

    #[tokio::test]
    async fn test_initialize_handshake() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_initialized_notification_gets_no_response() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_contains_registered_tool() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["tools"][0]["name"], "echo");
    }

    #[tokio::test]
    async fn test_tools_call_dispatches() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"echo","arguments":{"message":"hi"}}}"#,
            )
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], "hi");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"nope"}}"#,
            )
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unknown_method_is_method_not_found() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":5,"method":"bogus/method"}"#)
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let response = server().handle_line("{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, -32700);
    }
}
