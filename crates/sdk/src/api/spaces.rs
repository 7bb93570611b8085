//! Spaces API endpoints.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::{Deserialize, Serialize};

/// Spaces API for managing Documize spaces (folders/areas).
pub struct SpacesApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> SpacesApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// List all spaces visible to the authenticated user.
    pub async fn list(&self) -> DocumizeResult<Vec<Space>> {
        self.client.http.get("/api/space").await
    }

    /// Get a specific space by ID.
    pub async fn get(&self, space_id: &str) -> DocumizeResult<Space> {
        self.client.http.get(&format!("/api/space/{space_id}")).await
    }

    /// Create a new space.
    pub async fn create(&self, name: &str) -> DocumizeResult<Space> {
        let payload = CreateSpacePayload {
            name,
            clone_id: "",
            copy_template: false,
            copy_permission: false,
            copy_document: false,
        };
        self.client.http.post("/api/space", &payload).await
    }

    /// Delete a space by ID.
    pub async fn delete(&self, space_id: &str) -> DocumizeResult<()> {
        self.client
            .http
            .delete(&format!("/api/space/{space_id}"))
            .await
    }
}

/// A Documize space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created: Option<String>,
    pub revised: Option<String>,
}

/// Creation payload expected by `POST /api/space`. The clone/copy fields are
/// mandatory on the wire even when unused.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSpacePayload<'a> {
    name: &'a str,
    clone_id: &'a str,
    copy_template: bool,
    copy_permission: bool,
    copy_document: bool,
}
