//! Configuration types for the Documize SDK.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Configuration for the Documize client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Documize server.
    pub base_url: Url,
    /// Long-lived API credentials.
    pub credentials: Credentials,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and credentials.
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Long-lived Documize API credentials.
///
/// Holds the Base64 encoding of `orgId:email:password` opaquely; the only
/// thing the SDK ever does with it is build the `Basic` challenge header for
/// the authentication endpoint. The contents are not validated here — a
/// malformed credential fails at authentication time, not at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Wrap an already Base64-encoded `orgId:email:password` triple.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encode raw credential parts.
    ///
    /// `org_id` may be empty for single-tenant deployments.
    pub fn encode(org_id: &str, email: &str, password: &str) -> Self {
        Self(BASE64_STANDARD.encode(format!("{org_id}:{email}:{password}")))
    }

    /// The `Basic` challenge header value used by the authentication call.
    pub(crate) fn basic(&self) -> String {
        format!("Basic {}", self.0)
    }
}

// Credentials must never leak into logs or error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(***)")
    }
}
