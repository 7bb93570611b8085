//! Document export endpoints.
//!
//! The server exposes one export endpoint for all formats and responds with
//! HTML; the response is passed through as raw text, unparsed.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::Serialize;

/// Export API for retrieving rendered document content.
pub struct ExportApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> ExportApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// Export the given documents of a space as HTML.
    pub async fn documents(&self, space_id: &str, document_ids: &[&str]) -> DocumizeResult<String> {
        let payload = ExportPayload {
            space_id,
            data: document_ids,
            filter_type: "document",
        };
        self.client.http.post_text("/api/export", &payload).await
    }

    /// Export a single document as HTML.
    pub async fn document(&self, space_id: &str, document_id: &str) -> DocumizeResult<String> {
        self.documents(space_id, &[document_id]).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportPayload<'a> {
    space_id: &'a str,
    data: &'a [&'a str],
    filter_type: &'a str,
}
