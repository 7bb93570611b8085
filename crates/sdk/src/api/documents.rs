//! Documents and pages API endpoints.
//!
//! Documents are containers; their content lives in ordered pages
//! (sections). New documents are created by uploading a file through the
//! import endpoint, not here.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::{Deserialize, Serialize};

/// Documents API for reading and managing documents and their pages.
pub struct DocumentsApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// List all documents in a space.
    pub async fn list(&self, space_id: &str) -> DocumizeResult<Vec<Document>> {
        self.client
            .http
            .get(&format!("/api/documents?space={space_id}"))
            .await
    }

    /// Get a specific document by ID.
    pub async fn get(&self, document_id: &str) -> DocumizeResult<Document> {
        self.client
            .http
            .get(&format!("/api/documents/{document_id}"))
            .await
    }

    /// Update a document's metadata.
    pub async fn update(
        &self,
        document_id: &str,
        params: &UpdateDocumentParams,
    ) -> DocumizeResult<Document> {
        self.client
            .http
            .put(&format!("/api/documents/{document_id}"), params)
            .await
    }

    /// Delete a document.
    pub async fn delete(&self, document_id: &str) -> DocumizeResult<()> {
        self.client
            .http
            .delete(&format!("/api/documents/{document_id}"))
            .await
    }

    /// List the pages of a document.
    pub async fn list_pages(&self, document_id: &str) -> DocumizeResult<Vec<Page>> {
        self.client
            .http
            .get(&format!("/api/documents/{document_id}/pages"))
            .await
    }

    /// Get a specific page of a document.
    pub async fn get_page(&self, document_id: &str, page_id: &str) -> DocumizeResult<Page> {
        self.client
            .http
            .get(&format!("/api/documents/{document_id}/pages/{page_id}"))
            .await
    }

    /// Create a new page in a document.
    pub async fn create_page(
        &self,
        document_id: &str,
        params: &CreatePageParams,
    ) -> DocumizeResult<Page> {
        // The API expects a nested { page, meta } structure.
        let payload = CreatePagePayload {
            page: PagePayload {
                document_id,
                title: &params.title,
                body: &params.body,
                content_type: params.content_type.as_deref().unwrap_or("wysiwyg"),
                page_type: params.page_type.as_deref().unwrap_or("section"),
                level: params.level.unwrap_or(1),
                sequence: params.sequence.unwrap_or(1.0),
            },
            meta: PageMetaPayload {
                document_id,
                raw_body: &params.body,
                config: "{}",
            },
        };
        self.client
            .http
            .post(&format!("/api/documents/{document_id}/pages"), &payload)
            .await
    }

    /// Update an existing page.
    pub async fn update_page(
        &self,
        document_id: &str,
        page_id: &str,
        params: &UpdatePageParams,
    ) -> DocumizeResult<Page> {
        self.client
            .http
            .put(
                &format!("/api/documents/{document_id}/pages/{page_id}"),
                params,
            )
            .await
    }

    /// Delete a page from a document.
    pub async fn delete_page(&self, document_id: &str, page_id: &str) -> DocumizeResult<()> {
        self.client
            .http
            .delete(&format!("/api/documents/{document_id}/pages/{page_id}"))
            .await
    }
}

/// A Documize document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub org_id: Option<String>,
    pub folder_id: Option<String>,
    pub user_id: Option<String>,
    pub name: String,
    pub excerpt: Option<String>,
    pub tags: Option<String>,
    pub created: Option<String>,
    pub revised: Option<String>,
    pub template: Option<bool>,
    pub protection: Option<i64>,
    pub approval: Option<i64>,
    pub lifecycle: Option<i64>,
}

/// A page (section) within a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub document_id: String,
    pub title: String,
    pub body: String,
    pub content_type: Option<String>,
    pub page_type: Option<String>,
    pub level: Option<u32>,
    pub sequence: Option<f64>,
    pub created: Option<String>,
    pub revised: Option<String>,
}

/// Fields that can be updated on a document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDocumentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Parameters for creating a page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageParams {
    pub title: String,
    pub body: String,
    /// Defaults to `wysiwyg`.
    pub content_type: Option<String>,
    /// Defaults to `section`.
    pub page_type: Option<String>,
    /// Defaults to 1.
    pub level: Option<u32>,
    /// Defaults to 1.0.
    pub sequence: Option<f64>,
}

/// Fields that can be updated on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<f64>,
}

#[derive(Debug, Serialize)]
struct CreatePagePayload<'a> {
    page: PagePayload<'a>,
    meta: PageMetaPayload<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PagePayload<'a> {
    document_id: &'a str,
    title: &'a str,
    body: &'a str,
    content_type: &'a str,
    page_type: &'a str,
    level: u32,
    sequence: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMetaPayload<'a> {
    document_id: &'a str,
    raw_body: &'a str,
    config: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> DocumizeClient {
        Mock::given(method("POST"))
            .and(path("/api/public/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok1" })))
            .mount(server)
            .await;

        DocumizeClient::builder()
            .base_url(server.uri())
            .credentials(Credentials::encode("demo", "api@example.org", "test"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_scopes_by_space_query() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/documents"))
            .and(query_param("space", "sp1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "doc1", "name": "Handbook", "folderId": "sp1" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let docs = client.documents().list("sp1").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].folder_id.as_deref(), Some("sp1"));
    }

    #[tokio::test]
    async fn test_create_page_builds_nested_payload() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/documents/doc1/pages"))
            .and(body_json(json!({
                "page": {
                    "documentId": "doc1",
                    "title": "Intro",
                    "body": "<p>hello</p>",
                    "contentType": "wysiwyg",
                    "pageType": "section",
                    "level": 1,
                    "sequence": 1.0
                },
                "meta": {
                    "documentId": "doc1",
                    "rawBody": "<p>hello</p>",
                    "config": "{}"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pg1",
                "documentId": "doc1",
                "title": "Intro",
                "body": "<p>hello</p>"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = CreatePageParams {
            title: "Intro".to_string(),
            body: "<p>hello</p>".to_string(),
            content_type: None,
            page_type: None,
            level: None,
            sequence: None,
        };
        let page = client.documents().create_page("doc1", &params).await.unwrap();
        assert_eq!(page.id, "pg1");
    }

    #[tokio::test]
    async fn test_update_omits_unset_fields() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("PUT"))
            .and(path("/api/documents/doc1"))
            .and(body_json(json!({ "name": "Renamed" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "doc1",
                "name": "Renamed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = UpdateDocumentParams {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let doc = client.documents().update("doc1", &params).await.unwrap();
        assert_eq!(doc.name, "Renamed");
    }
}
