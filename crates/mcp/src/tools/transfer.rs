// Import and export tools

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_object, json_schema_string, render_error, render_json, Tool,
};
use anyhow::{Context, Result};
use documize_sdk::DocumizeClient;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocumentArgs {
    space_id: String,
    filename: String,
    content: String,
}

/// Tool to create a document by uploading a file into a space.
pub struct ImportDocumentTool {
    client: Arc<DocumizeClient>,
}

impl ImportDocumentTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ImportDocumentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "import_document".to_string(),
            description: "Create a document by uploading a file into a space. \
                The filename extension determines the format: .html/.htm, .md/.markdown \
                or .doc/.docx"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The space to import the document into"),
                    "filename": json_schema_string("The file name, including its extension"),
                    "content": json_schema_string("The file content"),
                }),
                vec!["spaceId", "filename", "content"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ImportDocumentArgs =
            serde_json::from_value(arguments).context("Invalid arguments for import_document")?;
        match self
            .client
            .import()
            .document(&args.space_id, &args.filename, args.content.into_bytes())
            .await
        {
            Ok(document) => render_json(&document),
            Err(err) => render_error(&err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocumentsArgs {
    space_id: String,
    document_ids: Vec<String>,
}

/// Tool to export documents as HTML.
pub struct ExportDocumentsTool {
    client: Arc<DocumizeClient>,
}

impl ExportDocumentsTool {
    pub fn new(client: Arc<DocumizeClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ExportDocumentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "export_documents".to_string(),
            description: "Export one or more documents of a space as HTML".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "spaceId": json_schema_string("The space containing the documents"),
                    "documentIds": json_schema_array(
                        json_schema_string("A document ID"),
                        "The documents to export"
                    ),
                }),
                vec!["spaceId", "documentIds"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ExportDocumentsArgs =
            serde_json::from_value(arguments).context("Invalid arguments for export_documents")?;
        let ids: Vec<&str> = args.document_ids.iter().map(String::as_str).collect();
        match self.client.export().documents(&args.space_id, &ids).await {
            // The export endpoint responds with raw HTML; pass it through.
            Ok(html) => Ok(CallToolResult {
                content: vec![ToolContent::text(html)],
                is_error: None,
            }),
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
    async fn test_import_uploads_to_space() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/import/folder/sp1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "doc1",
                "name": "guide"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ImportDocumentTool::new(client(&server).await);
        let result = tool
            .execute(json!({
                "spaceId": "sp1",
                "filename": "guide.md",
                "content": "# Hello"
            }))
            .await
            .unwrap();
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_export_passes_html_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/export"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Handbook</h1>"))
            .mount(&server)
            .await;

        let tool = ExportDocumentsTool::new(client(&server).await);
        let result = tool
            .execute(json!({ "spaceId": "sp1", "documentIds": ["doc1"] }))
            .await
            .unwrap();
        let ToolContent::Text { text } = &result.content[0];
        assert_eq!(text, "<h1>Handbook</h1>");
    }
}
