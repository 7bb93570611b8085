// Category tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, render_error, render_json, Tool};
use anyhow::{Context, Result};
use documize_sdk::DocumizeClient;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCategoriesArgs {
    space_id: String,
}

/// Tool to list the categories of a space.
pub struct ListCategoriesTool {
    client: Arc<DocumizeClient>,
}

impl ListCategoriesTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListCategoriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_categories".to_string(),
            description: "List all categories in a space".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The space ID to list categories from"),
                }),
                vec!["spaceId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListCategoriesArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_categories")?;
        match self.client.categories().list(&args.space_id).await {
            Ok(categories) => render_json(&categories),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCategoryArgs {
    space_id: String,
    name: String,
}

/// Tool to create a category in a space.
pub struct CreateCategoryTool {
    client: Arc<DocumizeClient>,
}

impl CreateCategoryTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateCategoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_category".to_string(),
            description: "Create a new category in a space".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The space ID where the category will be created"),
                    "name": json_schema_string("The name of the category"),
                }),
                vec!["spaceId", "name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreateCategoryArgs =
            serde_json::from_value(arguments).context("Invalid arguments for create_category")?;
        match self
            .client
            .categories()
            .create(&args.space_id, &args.name)
            .await
        {
            Ok(category) => render_json(&category),
            Err(err) => render_error(&err),
        }
    }
}
