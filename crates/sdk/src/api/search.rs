//! Search API endpoints.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::{Deserialize, Serialize};

/// Search API for querying across documents, spaces and attachments.
pub struct SearchApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// Run a search query.
    pub async fn query(&self, query: &SearchQuery) -> DocumizeResult<Vec<SearchResult>> {
        let payload = SearchPayload {
            keywords: &query.keywords,
            content: query.content.unwrap_or(true),
            doc: query.doc.unwrap_or(true),
            tag: query.tag.unwrap_or(true),
            attachment: query.attachment.unwrap_or(false),
            space_id: query.space_id.as_deref().unwrap_or(""),
        };
        self.client.http.post("/api/search", &payload).await
    }
}

/// A search query. Unset scope flags default to searching document names,
/// content and tags but not attachments, across all spaces.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub keywords: String,
    pub content: Option<bool>,
    pub doc: Option<bool>,
    pub tag: Option<bool>,
    pub attachment: Option<bool>,
    pub space_id: Option<String>,
}

impl SearchQuery {
    /// Query with default scope flags.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            ..Default::default()
        }
    }

    /// Limit the search to one space.
    pub fn in_space(mut self, space_id: impl Into<String>) -> Self {
        self.space_id = Some(space_id.into());
        self
    }
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document_id: String,
    pub document: Option<String>,
    pub excerpt: Option<String>,
    pub space_id: Option<String>,
    pub space: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload<'a> {
    keywords: &'a str,
    content: bool,
    doc: bool,
    tag: bool,
    attachment: bool,
    space_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
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
    async fn test_query_fills_scope_defaults() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(body_json(json!({
                "keywords": "deployment guide",
                "content": true,
                "doc": true,
                "tag": true,
                "attachment": false,
                "spaceId": ""
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "documentId": "doc1",
                    "document": "Deployment Guide",
                    "excerpt": "how to deploy",
                    "spaceId": "sp1",
                    "space": "Engineering",
                    "tags": ""
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client
            .search()
            .query(&SearchQuery::new("deployment guide"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document_id, "doc1");
    }

    #[tokio::test]
    async fn test_query_scoped_to_space() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(body_json(json!({
                "keywords": "runbook",
                "content": true,
                "doc": true,
                "tag": true,
                "attachment": false,
                "spaceId": "sp2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let results = client
            .search()
            .query(&SearchQuery::new("runbook").in_space("sp2"))
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
