//! HTTP client utilities for testing.
//!
//! Helper functions for making HTTP requests to a running server during tests.

use reqwest::{Client, Response, Url};
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a default test client
pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build a URL for a server endpoint
pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Make a GET request
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client.get(build_url(addr, path)).send().await?)
}

/// POST a CSV body
pub async fn post_csv(
    addr: &SocketAddr,
    path: &str,
    csv: impl Into<String>,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    Ok(client
        .post(build_url(addr, path))
        .header(reqwest::header::CONTENT_TYPE, "text/csv")
        .body(csv.into())
        .send()
        .await?)
}
