//! Transport layer for the Documize SDK.

pub mod http;

pub use http::HttpTransport;
