//! MCP (Model Context Protocol) server for the Documize documentation
//! platform. Exposes spaces, documents, pages, categories, users, search,
//! import and export as agent tools over stdio.

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
