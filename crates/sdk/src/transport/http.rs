//! HTTP transport layer for the Documize SDK.
//!
//! Every outbound call goes through [`HttpTransport::execute`], which owns
//! the session-token lifecycle: lazy authentication before the first
//! request, bearer attachment on every request, and a single
//! re-authenticate-and-replay when a held token is rejected with 401.
//! Per logical request the flow is
//! `NotAuthenticated -> Authenticating -> Attached -> {Success | Retrying -> {Success | Failed}}`;
//! a second 401 on the replayed request is terminal.

use crate::config::ClientConfig;
use crate::error::{DocumizeError, DocumizeResult};
use reqwest::{header, multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

/// Authentication endpoint. The only call that carries the long-lived
/// credential; it never carries a bearer token.
const AUTHENTICATE_PATH: &str = "/api/public/authenticate";

/// Response body of the authentication endpoint.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// HTTP transport for making authenticated API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
    /// The single shared session token. `None` means not yet authenticated
    /// or invalidated. The async mutex doubles as the single-flight guard:
    /// concurrent callers needing a token queue on the lock, and all of them
    /// observe the token stored by whichever caller authenticated first.
    token: Arc<Mutex<Option<String>>>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> DocumizeResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DocumizeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Build a URL for the given path.
    ///
    /// A trailing slash on the configured base URL is tolerated; paths are
    /// always absolute (`/api/...`).
    fn build_url(&self, path: &str) -> DocumizeResult<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Exchange the long-lived credential for a fresh bearer token.
    ///
    /// Any failure here, transport or HTTP, is an authentication failure;
    /// the token cell is left untouched by this method.
    async fn authenticate(&self) -> DocumizeResult<String> {
        let url = self.build_url(AUTHENTICATE_PATH)?;
        debug!(url = %url, "authenticating");

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, self.config.credentials.basic())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| DocumizeError::AuthenticationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocumizeError::AuthenticationFailed(format!(
                "authentication endpoint returned status {}: {body}",
                status.as_u16()
            )));
        }

        let auth: AuthResponse = response.json().await.map_err(|e| {
            DocumizeError::AuthenticationFailed(format!("malformed authentication response: {e}"))
        })?;

        Ok(auth.token)
    }

    /// Return the held session token, authenticating first if none is held.
    async fn bearer_token(&self) -> DocumizeResult<String> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            return Ok(current.clone());
        }

        debug!("no session token held, authenticating");
        let fresh = self.authenticate().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Replace a token the server rejected with 401.
    ///
    /// Only the first request to observe the rejection re-authenticates;
    /// requests that raced it and arrive here with an already-replaced token
    /// reuse the new one.
    async fn refresh_token(&self, stale: &str) -> DocumizeResult<String> {
        let mut token = self.token.lock().await;
        match token.as_ref() {
            Some(current) if current != stale => Ok(current.clone()),
            _ => {
                *token = None;
                let fresh = self.authenticate().await?;
                *token = Some(fresh.clone());
                Ok(fresh)
            }
        }
    }

    /// Execute an authenticated request with the retry-once 401 policy.
    ///
    /// `make` rebuilds the request from scratch for each attempt, so the
    /// replay after re-authentication is a true copy of the original (and
    /// non-cloneable bodies such as multipart uploads can be replayed).
    async fn execute<F>(&self, make: F) -> DocumizeResult<Response>
    where
        F: Fn(&Client) -> DocumizeResult<RequestBuilder>,
    {
        let token = self.bearer_token().await?;
        let response = make(&self.client)?
            .bearer_auth(&token)
            .send()
            .await
            .map_err(DocumizeError::from_transport)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check_status(response).await;
        }

        warn!("session token rejected (401), re-authenticating and replaying once");
        let fresh = self.refresh_token(&token).await?;
        let retry = make(&self.client)?
            .bearer_auth(&fresh)
            .send()
            .await
            .map_err(DocumizeError::from_transport)?;

        if retry.status() == StatusCode::UNAUTHORIZED {
            return Err(DocumizeError::AuthorizationExpired);
        }
        Self::check_status(retry).await
    }

    /// Map a non-2xx response to an API error, passing 2xx through.
    async fn check_status(response: Response) -> DocumizeResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DocumizeError::from_response(status.as_u16(), &body))
    }

    /// Parse a JSON response body.
    async fn read_json<T: DeserializeOwned>(response: Response) -> DocumizeResult<T> {
        response.json().await.map_err(DocumizeError::from_transport)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> DocumizeResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(|client| Ok(client.get(url.clone()))).await?;
        Self::read_json(response).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> DocumizeResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self
            .execute(|client| Ok(client.post(url.clone()).json(body)))
            .await?;
        Self::read_json(response).await
    }

    /// Execute a POST request with an empty JSON body, discarding the
    /// response body.
    pub async fn post_empty(&self, path: &str) -> DocumizeResult<()> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request (no response body)");

        self.execute(|client| Ok(client.post(url.clone()).json(&serde_json::json!({}))))
            .await?;
        Ok(())
    }

    /// Execute a POST request and return the raw response text.
    ///
    /// Used for endpoints that respond with non-JSON payloads (document
    /// export returns HTML).
    pub async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> DocumizeResult<String> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request (text response)");

        let response = self
            .execute(|client| Ok(client.post(url.clone()).json(body)))
            .await?;
        response.text().await.map_err(DocumizeError::from_transport)
    }

    /// Execute a multipart POST request uploading a single file.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        content_type: &str,
        content: Vec<u8>,
    ) -> DocumizeResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, filename, "multipart POST request");

        let response = self
            .execute(|client| {
                let part = multipart::Part::bytes(content.clone())
                    .file_name(filename.to_string())
                    .mime_str(content_type)
                    .map_err(|e| DocumizeError::Request(format!("invalid content type: {e}")))?;
                let form = multipart::Form::new().part("attachment", part);
                Ok(client.post(url.clone()).multipart(form))
            })
            .await?;
        Self::read_json(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> DocumizeResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PUT request");

        let response = self
            .execute(|client| Ok(client.put(url.clone()).json(body)))
            .await?;
        Self::read_json(response).await
    }

    /// Execute a DELETE request, discarding the response body.
    pub async fn delete(&self, path: &str) -> DocumizeResult<()> {
        let url = self.build_url(path)?;
        debug!(url = %url, "DELETE request");

        self.execute(|client| Ok(client.delete(url.clone()))).await?;
        Ok(())
    }
}
