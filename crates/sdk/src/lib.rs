//! # Documize SDK
//!
//! Rust client for the Documize documentation platform REST API.
//!
//! The client exchanges a long-lived Base64 `orgId:email:password` credential
//! for a short-lived bearer token on first use, attaches the token to every
//! request, and transparently re-authenticates and replays a request exactly
//! once when the server rejects the token with 401.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use documize_sdk::{Credentials, DocumizeClient, DocumizeResult, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> DocumizeResult<()> {
//!     let client = DocumizeClient::builder()
//!         .base_url("https://docs.example.com")
//!         .credentials(Credentials::encode("demo", "api@example.org", "secret"))
//!         .build()?;
//!
//!     // List spaces
//!     let spaces = client.spaces().list().await?;
//!     println!("Found {} spaces", spaces.len());
//!
//!     // Search
//!     let hits = client
//!         .search()
//!         .query(&SearchQuery::new("deployment"))
//!         .await?;
//!     println!("Found {} matches", hits.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{DocumizeClient, DocumizeClientBuilder};
pub use config::{ClientConfig, Credentials};
pub use error::{DocumizeError, DocumizeResult};

// Re-export resource types for convenience
pub use api::categories::Category;
pub use api::documents::{
    CreatePageParams, Document, Page, UpdateDocumentParams, UpdatePageParams,
};
pub use api::search::{SearchQuery, SearchResult};
pub use api::spaces::Space;
pub use api::users::{CreateUserParams, Group, User};
