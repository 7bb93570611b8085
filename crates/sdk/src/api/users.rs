//! Users and groups API endpoints.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::{Deserialize, Serialize};

/// Users API for managing accounts and group membership.
pub struct UsersApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// List all users.
    pub async fn list(&self) -> DocumizeResult<Vec<User>> {
        self.client.http.get("/api/users").await
    }

    /// Create a new user account.
    pub async fn create(&self, params: &CreateUserParams) -> DocumizeResult<User> {
        let payload = CreateUserPayload {
            firstname: &params.firstname,
            lastname: &params.lastname,
            email: &params.email,
            view_users: params.view_users.unwrap_or(true),
            editor: params.editor.unwrap_or(true),
            analytics: params.analytics.unwrap_or(true),
            active: params.active.unwrap_or(true),
        };
        self.client.http.post("/api/users", &payload).await
    }

    /// Delete a user account.
    pub async fn delete(&self, user_id: &str) -> DocumizeResult<()> {
        self.client.http.delete(&format!("/api/users/{user_id}")).await
    }

    /// List all groups.
    pub async fn list_groups(&self) -> DocumizeResult<Vec<Group>> {
        self.client.http.get("/api/group").await
    }

    /// Add a user to a group.
    pub async fn join_group(&self, group_id: &str, user_id: &str) -> DocumizeResult<()> {
        self.client
            .http
            .post_empty(&format!("/api/group/{group_id}/join/{user_id}"))
            .await
    }

    /// Remove a user from a group.
    pub async fn leave_group(&self, group_id: &str, user_id: &str) -> DocumizeResult<()> {
        self.client
            .http
            .delete(&format!("/api/group/{group_id}/leave/{user_id}"))
            .await
    }
}

/// A Documize user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created: Option<String>,
    pub active: Option<bool>,
    pub editor: Option<bool>,
    pub view_users: Option<bool>,
    pub analytics: Option<bool>,
}

/// A user group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub org_id: Option<String>,
    pub created: Option<String>,
    pub revised: Option<String>,
}

/// Parameters for creating a user. Unset permission flags default to true,
/// matching the server's notion of a regular active editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserParams {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub view_users: Option<bool>,
    pub editor: Option<bool>,
    pub analytics: Option<bool>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserPayload<'a> {
    firstname: &'a str,
    lastname: &'a str,
    email: &'a str,
    view_users: bool,
    editor: bool,
    analytics: bool,
    active: bool,
}
