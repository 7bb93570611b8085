// Space tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_object, json_schema_string, render_error, render_json, render_message, Tool,
};
use anyhow::{Context, Result};
use documize_sdk::DocumizeClient;
use serde::Deserialize;
use std::sync::Arc;

/// Tool to list all spaces.
pub struct ListSpacesTool {
    client: Arc<DocumizeClient>,
}

impl ListSpacesTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListSpacesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_spaces".to_string(),
            description: "List all available spaces (folders/areas) in the Documize instance"
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.spaces().list().await {
            Ok(spaces) => render_json(&spaces),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetSpaceArgs {
    space_id: String,
}

/// Tool to get details about a specific space.
pub struct GetSpaceTool {
    client: Arc<DocumizeClient>,
}

impl GetSpaceTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSpaceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_space".to_string(),
            description: "Get details about a specific space".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The unique identifier of the space"),
                }),
                vec!["spaceId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetSpaceArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_space")?;
        match self.client.spaces().get(&args.space_id).await {
            Ok(space) => render_json(&space),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateSpaceArgs {
    name: String,
}

/// Tool to create a new space.
pub struct CreateSpaceTool {
    client: Arc<DocumizeClient>,
}

impl CreateSpaceTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateSpaceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_space".to_string(),
            description: "Create a new space".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "name": json_schema_string("The name of the space"),
                }),
                vec!["name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreateSpaceArgs =
            serde_json::from_value(arguments).context("Invalid arguments for create_space")?;
        match self.client.spaces().create(&args.name).await {
            Ok(space) => render_json(&space),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteSpaceArgs {
    space_id: String,
}

/// Tool to delete a space.
pub struct DeleteSpaceTool {
    client: Arc<DocumizeClient>,
}

impl DeleteSpaceTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteSpaceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_space".to_string(),
            description: "Delete a space and everything in it".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The unique identifier of the space"),
                }),
                vec!["spaceId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DeleteSpaceArgs =
            serde_json::from_value(arguments).context("Invalid arguments for delete_space")?;
        match self.client.spaces().delete(&args.space_id).await {
            Ok(()) => render_message(format!("Space {} deleted successfully", args.space_id)),
            Err(err) => render_error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use documize_sdk::Credentials;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> Arc<DocumizeClient> {
        Mock::given(method("POST"))
            .and(path("/api/public/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok1" })))
            .mount(server)
            .await;

        Arc::new(
            DocumizeClient::builder()
                .base_url(server.uri())
                .credentials(Credentials::encode("demo", "api@example.org", "test"))
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_list_spaces_renders_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/space"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "sp1", "name": "Engineering" }
            ])))
            .mount(&server)
            .await;

        let tool = ListSpacesTool::new(client(&server).await);
        let result = tool.execute(json!({})).await.unwrap();
        assert!(result.is_error.is_none());
        let crate::protocol::ToolContent::Text { text } = &result.content[0];
        assert!(text.contains("Engineering"));
    }

    #[tokio::test]
    async fn test_get_space_error_is_tool_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/space/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "not found" })),
            )
            .mount(&server)
            .await;

        let tool = GetSpaceTool::new(client(&server).await);
        let result = tool.execute(json!({ "spaceId": "missing" })).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        let crate::protocol::ToolContent::Text { text } = &result.content[0];
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[tokio::test]
    async fn test_get_space_rejects_bad_arguments() {
        let server = MockServer::start().await;
        let tool = GetSpaceTool::new(client(&server).await);
        assert!(tool.execute(json!({ "wrong": 1 })).await.is_err());
    }
}
