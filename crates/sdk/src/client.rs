//! Main client for the Documize SDK.

use crate::api::{
    CategoriesApi, DocumentsApi, ExportApi, ImportApi, SearchApi, SpacesApi, UsersApi,
};
use crate::config::{ClientConfig, Credentials};
use crate::error::{DocumizeError, DocumizeResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable holding the server base URL.
pub const ENV_API_URL: &str = "DOCUMIZE_API_URL";
/// Environment variable holding the Base64 `orgId:email:password` credential.
pub const ENV_API_CREDENTIALS: &str = "DOCUMIZE_API_CREDENTIALS";

/// Main client for interacting with a Documize server.
///
/// Resource services borrow the client and issue calls through its shared
/// transport, so one client means one session token regardless of how many
/// services are in use.
#[derive(Debug, Clone)]
pub struct DocumizeClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl DocumizeClient {
    /// Create a new client builder.
    pub fn builder() -> DocumizeClientBuilder {
        DocumizeClientBuilder::new()
    }

    /// Create a client from `DOCUMIZE_API_URL` and `DOCUMIZE_API_CREDENTIALS`.
    pub fn from_env() -> DocumizeResult<Self> {
        let base_url = std::env::var(ENV_API_URL)
            .map_err(|_| DocumizeError::Config(format!("{ENV_API_URL} is not set")))?;
        let credentials = std::env::var(ENV_API_CREDENTIALS)
            .map_err(|_| DocumizeError::Config(format!("{ENV_API_CREDENTIALS} is not set")))?;

        Self::builder()
            .base_url(base_url)
            .credentials(Credentials::new(credentials))
            .build()
    }

    fn from_config(config: ClientConfig) -> DocumizeResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the spaces API.
    pub fn spaces(&self) -> SpacesApi<'_> {
        SpacesApi::new(self)
    }

    /// Get the documents API.
    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    /// Get the categories API.
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Get the import API.
    pub fn import(&self) -> ImportApi<'_> {
        ImportApi::new(self)
    }

    /// Get the export API.
    pub fn export(&self) -> ExportApi<'_> {
        ExportApi::new(self)
    }
}

/// Builder for creating a [`DocumizeClient`].
pub struct DocumizeClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl DocumizeClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL of the Documize server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> DocumizeResult<DocumizeClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| DocumizeError::Config("base_url is required".to_string()))?;
        let credentials = self
            .credentials
            .ok_or_else(|| DocumizeError::Config("credentials are required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            credentials,
            timeout: self.timeout,
        };

        DocumizeClient::from_config(config)
    }
}

impl Default for DocumizeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = DocumizeClient::builder()
            .credentials(Credentials::new("abc"))
            .build();
        match result {
            Err(DocumizeError::Config(msg)) => assert!(msg.contains("base_url")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = DocumizeClient::builder()
            .base_url("https://docs.example.com")
            .build();
        match result {
            Err(DocumizeError::Config(msg)) => assert!(msg.contains("credentials")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = DocumizeClient::builder()
            .base_url("not a url")
            .credentials(Credentials::new("abc"))
            .build();
        assert!(matches!(result, Err(DocumizeError::InvalidUrl(_))));
    }
}
