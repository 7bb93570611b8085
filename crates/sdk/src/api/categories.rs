//! Categories API endpoints.

use crate::client::DocumizeClient;
use crate::error::DocumizeResult;
use serde::{Deserialize, Serialize};

/// Categories API for organizing documents within a space.
pub struct CategoriesApi<'a> {
    client: &'a DocumizeClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(client: &'a DocumizeClient) -> Self {
        Self { client }
    }

    /// List all categories in a space.
    pub async fn list(&self, space_id: &str) -> DocumizeResult<Vec<Category>> {
        self.client
            .http
            .get(&format!("/api/space/{space_id}/category"))
            .await
    }

    /// Create a new category in a space.
    pub async fn create(&self, space_id: &str, name: &str) -> DocumizeResult<Category> {
        let payload = CreateCategoryPayload { space_id, name };
        self.client.http.post("/api/category", &payload).await
    }
}

/// A document category within a space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub space_id: Option<String>,
    pub name: String,
    pub created: Option<String>,
    pub revised: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCategoryPayload<'a> {
    space_id: &'a str,
    name: &'a str,
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
    async fn test_list_uses_space_scoped_path() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/space/sp1/category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "cat1", "spaceId": "sp1", "name": "Guides" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let categories = client.categories().list("sp1").await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Guides");
    }

    #[tokio::test]
    async fn test_create_posts_to_category_root() {
        let server = MockServer::start().await;
        let client = client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/category"))
            .and(body_json(json!({ "spaceId": "sp1", "name": "Guides" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cat1",
                "spaceId": "sp1",
                "name": "Guides"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let category = client.categories().create("sp1", "Guides").await.unwrap();
        assert_eq!(category.id, "cat1");
    }
}
