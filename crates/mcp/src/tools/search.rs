// Search tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_object, json_schema_string, render_error, render_json, Tool,
};
use anyhow::{Context, Result};
use documize_sdk::{DocumizeClient, SearchQuery};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchArgs {
    query: String,
    space_id: Option<String>,
    attachment: Option<bool>,
}

/// Tool to search across documents, spaces and attachments.
pub struct SearchTool {
    client: Arc<DocumizeClient>,
}

impl SearchTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Search across documents, spaces and attachments".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("The search query"),
                    "spaceId": json_schema_string("Optional: limit search to a specific space"),
                    "attachment": json_schema_boolean("Optional: include attachments in the search (default: false)"),
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchArgs =
            serde_json::from_value(arguments).context("Invalid arguments for search")?;
        let query = SearchQuery {
            keywords: args.query,
            space_id: args.space_id,
            attachment: args.attachment,
            ..Default::default()
        };
        match self.client.search().query(&query).await {
            Ok(results) => render_json(&results),
            Err(err) => render_error(&err),
        }
    }
}
