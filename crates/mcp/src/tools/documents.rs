// Document and page tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_number, json_schema_object, json_schema_string, render_error, render_json,
    render_message, Tool,
};
use anyhow::{Context, Result};
use documize_sdk::{CreatePageParams, DocumizeClient, UpdateDocumentParams, UpdatePageParams};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpaceScopedArgs {
    space_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentScopedArgs {
    document_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageScopedArgs {
    document_id: String,
    page_id: String,
}

/// Tool to list all documents in a space.
pub struct ListDocumentsTool {
    client: Arc<DocumizeClient>,
}

impl ListDocumentsTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListDocumentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_documents".to_string(),
            description: "List all documents in a specific space".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The unique identifier of the space"),
                }),
                vec!["spaceId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SpaceScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_documents")?;
        match self.client.documents().list(&args.space_id).await {
            Ok(documents) => render_json(&documents),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to get a document with its metadata.
pub struct GetDocumentTool {
    client: Arc<DocumizeClient>,
}

impl GetDocumentTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetDocumentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_document".to_string(),
            description: "Get a specific document by ID, including its metadata".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The unique identifier of the document"),
                }),
                vec!["documentId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DocumentScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_document")?;
        match self.client.documents().get(&args.document_id).await {
            Ok(document) => render_json(&document),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateDocumentArgs {
    document_id: String,
    name: Option<String>,
    excerpt: Option<String>,
    tags: Option<String>,
}

/// Tool to update a document's metadata.
pub struct UpdateDocumentTool {
    client: Arc<DocumizeClient>,
}

impl UpdateDocumentTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateDocumentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_document".to_string(),
            description: "Update an existing document's name, excerpt or tags".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The document ID to update"),
                    "name": json_schema_string("The new document name (optional)"),
                    "excerpt": json_schema_string("The new excerpt (optional)"),
                    "tags": json_schema_string("The new tags (optional)"),
                }),
                vec!["documentId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: UpdateDocumentArgs =
            serde_json::from_value(arguments).context("Invalid arguments for update_document")?;
        let params = UpdateDocumentParams {
            name: args.name,
            excerpt: args.excerpt,
            tags: args.tags,
        };
        match self.client.documents().update(&args.document_id, &params).await {
            Ok(document) => render_json(&document),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to delete a document.
pub struct DeleteDocumentTool {
    client: Arc<DocumizeClient>,
}

impl DeleteDocumentTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteDocumentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_document".to_string(),
            description: "Delete a document".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The document ID to delete"),
                }),
                vec!["documentId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DocumentScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for delete_document")?;
        match self.client.documents().delete(&args.document_id).await {
            Ok(()) => render_message(format!(
                "Document {} deleted successfully",
                args.document_id
            )),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to list the pages of a document.
pub struct ListPagesTool {
    client: Arc<DocumizeClient>,
}

impl ListPagesTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListPagesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_pages".to_string(),
            description: "List the pages (sections) of a document, including their content"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The unique identifier of the document"),
                }),
                vec!["documentId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DocumentScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_pages")?;
        match self.client.documents().list_pages(&args.document_id).await {
            Ok(pages) => render_json(&pages),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to get a single page of a document.
pub struct GetPageTool {
    client: Arc<DocumizeClient>,
}

impl GetPageTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetPageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_page".to_string(),
            description: "Get a specific page (section) of a document".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The unique identifier of the document"),
                    "pageId": json_schema_string("The unique identifier of the page"),
                }),
                vec!["documentId", "pageId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: PageScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_page")?;
        match self
            .client
            .documents()
            .get_page(&args.document_id, &args.page_id)
            .await
        {
            Ok(page) => render_json(&page),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePageArgs {
    document_id: String,
    title: String,
    body: String,
    level: Option<u32>,
    sequence: Option<f64>,
}

/// Tool to append a page to a document.
pub struct CreatePageTool {
    client: Arc<DocumizeClient>,
}

impl CreatePageTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_page".to_string(),
            description: "Create a new page (section) in a document".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The document to add the page to"),
                    "title": json_schema_string("The page title"),
                    "body": json_schema_string("The page content (HTML)"),
                    "level": json_schema_number("Heading level, defaults to 1"),
                    "sequence": json_schema_number("Sort position within the document, defaults to 1"),
                }),
                vec!["documentId", "title", "body"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: CreatePageArgs =
            serde_json::from_value(arguments).context("Invalid arguments for create_page")?;
        let params = CreatePageParams {
            title: args.title,
            body: args.body,
            content_type: None,
            page_type: None,
            level: args.level,
            sequence: args.sequence,
        };
        match self
            .client
            .documents()
            .create_page(&args.document_id, &params)
            .await
        {
            Ok(page) => render_json(&page),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePageArgs {
    document_id: String,
    page_id: String,
    title: Option<String>,
    body: Option<String>,
    level: Option<u32>,
    sequence: Option<f64>,
}

/// Tool to update an existing page.
pub struct UpdatePageTool {
    client: Arc<DocumizeClient>,
}

impl UpdatePageTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_page".to_string(),
            description: "Update a page (section) of a document".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The document containing the page"),
                    "pageId": json_schema_string("The page to update"),
                    "title": json_schema_string("The new title (optional)"),
                    "body": json_schema_string("The new content (optional)"),
                    "level": json_schema_number("The new heading level (optional)"),
                    "sequence": json_schema_number("The new sort position (optional)"),
                }),
                vec!["documentId", "pageId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: UpdatePageArgs =
            serde_json::from_value(arguments).context("Invalid arguments for update_page")?;
        let params = UpdatePageParams {
            title: args.title,
            body: args.body,
            level: args.level,
            sequence: args.sequence,
            ..Default::default()
        };
        match self
            .client
            .documents()
            .update_page(&args.document_id, &args.page_id, &params)
            .await
        {
            Ok(page) => render_json(&page),
            Err(err) => render_error(&err),
        }
    }
}

/// Tool to delete a page from a document.
pub struct DeletePageTool {
    client: Arc<DocumizeClient>,
}

impl DeletePageTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeletePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_page".to_string(),
            description: "Delete a page (section) from a document".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "documentId": json_schema_string("The document containing the page"),
                    "pageId": json_schema_string("The page to delete"),
                }),
                vec!["documentId", "pageId"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: PageScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for delete_page")?;
        match self
            .client
            .documents()
            .delete_page(&args.document_id, &args.page_id)
            .await
        {
            Ok(()) => render_message(format!(
                "Page {} deleted from document {}",
                args.page_id, args.document_id
            )),
            Err(err) => render_error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use documize_sdk::Credentials;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
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
    async fn test_list_documents_passes_space_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/documents"))
            .and(query_param("space", "sp1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "doc1", "name": "Handbook" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListDocumentsTool::new(client(&server).await);
        let result = tool.execute(json!({ "spaceId": "sp1" })).await.unwrap();
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_create_page_fills_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/documents/doc1/pages"))
            .and(body_json(json!({
                "page": {
                    "documentId": "doc1",
                    "title": "Intro",
                    "body": "<p>hi</p>",
                    "contentType": "wysiwyg",
                    "pageType": "section",
                    "level": 1,
                    "sequence": 1.0
                },
                "meta": {
                    "documentId": "doc1",
                    "rawBody": "<p>hi</p>",
                    "config": "{}"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pg1",
                "documentId": "doc1",
                "title": "Intro",
                "body": "<p>hi</p>"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CreatePageTool::new(client(&server).await);
        let result = tool
            .execute(json!({
                "documentId": "doc1",
                "title": "Intro",
                "body": "<p>hi</p>"
            }))
            .await
            .unwrap();
        assert!(result.is_error.is_none());
    }
}
