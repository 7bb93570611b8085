// User and group tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_object, json_schema_string, render_error, render_json,
    render_message, Tool,
};
use anyhow::{Context, Result};
use documize_sdk::{CreateUserParams, DocumizeClient};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupMembershipArgs {
    group_id: String,
    user_id: String,
}

/// Tool to list all users.
pub struct ListUsersTool {
    client: Arc<DocumizeClient>,
}

impl ListUsersTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListUsersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_users".to_string(),
            description: "List all user accounts".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.users().list().await {
            Ok(users) => render_json(&users),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserArgs {
    firstname: String,
    lastname: String,
    email: String,
    editor: Option<bool>,
    active: Option<bool>,
}

/// Tool to create a user account.
pub struct CreateUserTool {
    client: Arc<DocumizeClient>,
}

impl CreateUserTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateUserTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_user".to_string(),
            description: "Create a new user account".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "firstname": json_schema_string("The user's first name"),
                    "lastname": json_schema_string("The user's last name"),
                    "email": json_schema_string("The user's email address"),
                    "editor": json_schema_boolean("Whether the user can edit content (default: true)"),
                    "active": json_schema_boolean("Whether the account is active (default: true)"),
                }),
                vec!["firstname", "lastname", "email"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreateUserArgs =
            serde_json::from_value(arguments).context("Invalid arguments for create_user")?;
        let params = CreateUserParams {
            firstname: args.firstname,
            lastname: args.lastname,
            email: args.email,
            editor: args.editor,
            active: args.active,
            ..Default::default()
        };
        match self.client.users().create(&params).await {
            Ok(user) => render_json(&user),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteUserArgs {
    user_id: String,
}

/// Tool to delete a user account.
pub struct DeleteUserTool {
    client: Arc<DocumizeClient>,
}

impl DeleteUserTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteUserTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_user".to_string(),
            description: "Delete a user account".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "userId": json_schema_string("The user ID to delete"),
                }),
                vec!["userId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DeleteUserArgs =
            serde_json::from_value(arguments).context("Invalid arguments for delete_user")?;
        match self.client.users().delete(&args.user_id).await {
            Ok(()) => render_message(format!("User {} deleted successfully", args.user_id)),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to list all groups.
pub struct ListGroupsTool {
    client: Arc<DocumizeClient>,
}

impl ListGroupsTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListGroupsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_groups".to_string(),
            description: "List all user groups".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.client.users().list_groups().await {
            Ok(groups) => render_json(&groups),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to add a user to a group.
pub struct JoinGroupTool {
    client: Arc<DocumizeClient>,
}

impl JoinGroupTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for JoinGroupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "join_group".to_string(),
            description: "Add a user to a group".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "groupId": json_schema_string("The group ID"),
                    "userId": json_schema_string("The user ID to add"),
                }),
                vec!["groupId", "userId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GroupMembershipArgs =
            serde_json::from_value(arguments).context("Invalid arguments for join_group")?;
        match self.client.users().join_group(&args.group_id, &args.user_id).await {
            Ok(()) => render_message(format!(
                "User {} added to group {}",
                args.user_id, args.group_id
            )),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to remove a user from a group.
pub struct LeaveGroupTool {
    client: Arc<DocumizeClient>,
}

impl LeaveGroupTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for LeaveGroupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "leave_group".to_string(),
            description: "Remove a user from a group".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "groupId": json_schema_string("The group ID"),
                    "userId": json_schema_string("The user ID to remove"),
                }),
                vec!["groupId", "userId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GroupMembershipArgs =
            serde_json::from_value(arguments).context("Invalid arguments for leave_group")?;
        match self
            .client
            .users()
            .leave_group(&args.group_id, &args.user_id)
            .await
        {
            Ok(()) => render_message(format!(
                "User {} removed from group {}",
                args.user_id, args.group_id
            )),
            Err(err) => render_error(&err),
        }
    }
}
