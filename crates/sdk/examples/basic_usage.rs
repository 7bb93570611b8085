//! Basic SDK usage example.
//!
//! This example demonstrates how to connect to a Documize server and perform
//! basic operations like listing spaces and searching content.
//!
//! Run with: cargo run --example basic_usage

use documize_sdk::{Credentials, DocumizeClient, DocumizeResult, SearchQuery};
use std::time::Duration;

#[tokio::main]
async fn main() -> DocumizeResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Build the client with configuration
    let client = DocumizeClient::builder()
        .base_url("http://localhost:5001")
        .credentials(Credentials::encode("demo", "api@example.org", "secret"))
        .timeout(Duration::from_secs(30))
        .build()?;

    // List all spaces visible to this account
    println!("Listing spaces...");
    let spaces = client.spaces().list().await?;
    println!("Found {} spaces", spaces.len());

    for space in &spaces {
        println!("  {} ({})", space.name, space.id);

        // List documents in each space
        let documents = client.documents().list(&space.id).await?;
        for document in documents {
            println!("    - {}", document.name);
        }
    }

    // Search across all spaces
    println!("\nSearching for 'onboarding'...");
    let hits = client.search().query(&SearchQuery::new("onboarding")).await?;
    println!("Found {} matches", hits.len());

    Ok(())
}
