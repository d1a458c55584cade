// upstream/http_snippet_source.rs
use async_trait::async_trait;
use log::debug;
use reqwest::{self, Error as ReqwestError};
use std::io;
use std::io::Result as IoResult;
use std::time::Duration;
use url::Url;

use super::snippet_source::{SnippetBundle, SnippetSource};

pub struct HttpSnippetSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSnippetSource {
    /// The request timeout bounds the whole fetch so a slow upstream cannot
    /// stall a handler indefinitely.
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self { client, endpoint }
    }
}

#[async_trait]
impl SnippetSource for HttpSnippetSource {
    async fn fetch_snippets(&self) -> IoResult<SnippetBundle> {
        debug!("Fetching snippet bundle from '{}'", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(io_error_from_reqwest)?;

        if !response.status().is_success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to fetch snippets with status: {}", response.status()),
            ));
        }

        let body = response.bytes().await.map_err(io_error_from_reqwest)?;
        serde_json::from_slice(&body)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}

// Helper function to map a `reqwest::Error` to `std::io::Error`
fn io_error_from_reqwest(e: ReqwestError) -> io::Error {
    if e.is_timeout() {
        io::Error::new(io::ErrorKind::TimedOut, e.to_string())
    } else {
        io::Error::new(io::ErrorKind::Other, e.to_string())
    }
}
