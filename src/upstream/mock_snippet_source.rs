// upstream/mock_snippet_source.rs
use async_trait::async_trait;
use std::io::Result as IoResult;

use super::snippet_source::{RemoteSnippet, SnippetBundle, SnippetSource};

/// Serves a canned bundle without touching the network. Used by tests and
/// by the `--use-mock-source` flag.
pub struct MockSnippetSource {
    bundle: SnippetBundle,
}

impl MockSnippetSource {
    pub fn new() -> Self {
        Self {
            bundle: SnippetBundle {
                snippets: vec![
                    RemoteSnippet {
                        command: String::from("kubectl config get-contexts"),
                        description: String::from("Show available cluster contexts"),
                        output: None,
                        tag: Some(vec![String::from("kubernetes")]),
                    },
                    RemoteSnippet {
                        command: String::from("docker ps -a"),
                        description: String::from("List all containers"),
                        output: Some(String::from("CONTAINER ID   IMAGE   STATUS")),
                        tag: None,
                    },
                ],
            },
        }
    }

}

impl Default for MockSnippetSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetSource for MockSnippetSource {
    async fn fetch_snippets(&self) -> IoResult<SnippetBundle> {
        Ok(self.bundle.clone())
    }
}
