//! Document import (upload) endpoints.
//!
//! Documize creates documents by converting uploaded files, so this is the
//! document-creation path. HTML, Markdown and Word files are accepted; the
//! conversion itself happens server-side.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;

/// Import API for uploading files into a space.
pub struct ImportApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> ImportApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// Upload a file into a space, creating a document from it.
    ///
    /// The filename must carry an extension; it determines the content type
    /// sent with the upload. Returns the created document as reported by the
    /// server.
    pub async fn document(
        &self,
        space_id: &str,
        filename: &str,
        content: Vec<u8>,
    ) -> DocumizeResult<serde_json::Value> {
        self.client
            .http
            .post_file(
                &format!("/api/import/folder/{space_id}"),
                filename,
                content_type_for(filename),
                content,
            )
            .await
    }
}

/// Map a filename extension to the upload content type.
fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "md" | "markdown" => "text/markdown",
        "doc" | "docx" => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_content_type_inference() {
        assert_eq!(content_type_for("guide.html"), "text/html");
        assert_eq!(content_type_for("guide.HTM"), "text/html");
        assert_eq!(content_type_for("notes.md"), "text/markdown");
        assert_eq!(content_type_for("notes.markdown"), "text/markdown");
        assert_eq!(
            content_type_for("report.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("archive.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_upload_hits_space_scoped_import_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/public/authenticate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok1" })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/import/folder/sp1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "doc1",
                "name": "guide"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DocumizeClient::builder()
            .base_url(server.uri())
            .credentials(Credentials::encode("demo", "api@example.org", "test"))
            .build()
            .unwrap();

        let created = client
            .import()
            .document("sp1", "guide.html", b"<h1>Hello</h1>".to_vec())
            .await
            .unwrap();
        assert_eq!(created["id"], "doc1");
    }
}
