// MCP tools wrapping the Documize SDK

pub mod categories;
pub mod documents;
pub mod registry;
pub mod search;
pub mod spaces;
pub mod transfer;
pub mod users;

pub use categories::{CreateCategoryTool, ListCategoriesTool};
pub use documents::{
    CreatePageTool, DeleteDocumentTool, DeletePageTool, GetDocumentTool, GetPageTool,
    ListDocumentsTool, ListPagesTool, UpdateDocumentTool, UpdatePageTool,
};
pub use registry::{
    json_schema_array, json_schema_boolean, json_schema_number, json_schema_object,
    json_schema_string, Tool, ToolRegistry,
};
pub use search::SearchTool;
pub use spaces::{CreateSpaceTool, DeleteSpaceTool, GetSpaceTool, ListSpacesTool};
pub use transfer::{ExportDocumentsTool, ImportDocumentTool};
pub use users::{
    CreateUserTool, DeleteUserTool, JoinGroupTool, LeaveGroupTool, ListGroupsTool, ListUsersTool,
};

use crate::protocol::{CallToolResult, ToolContent};
use anyhow::Result;
use documize_sdk::DocumizeError;
use serde::Serialize;

/// Render a successful API response as pretty-printed JSON text content.
pub(crate) fn render_json<T: Serialize>(value: &T) -> Result<CallToolResult> {
    Ok(CallToolResult {
        content: vec![ToolContent::text(serde_json::to_string_pretty(value)?)],
        is_error: None,
    })
}

/// Render a plain confirmation message.
pub(crate) fn render_message(message: impl Into<String>) -> Result<CallToolResult> {
    Ok(CallToolResult {
        content: vec![ToolContent::text(message)],
        is_error: None,
    })
}

/// Render a normalized SDK error as an error tool result. The error kind and
/// message travel to the agent; the call itself still succeeds at the
/// protocol level.
pub(crate) fn render_error(err: &DocumizeError) -> Result<CallToolResult> {
    Ok(CallToolResult {
        content: vec![ToolContent::error(err.to_string())],
        is_error: Some(true),
    })
}
