// upstream/snippet_source.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Result as IoResult;

/// Wrapper shape of the remote snippet document: `{"snippets": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnippetBundle {
    pub snippets: Vec<RemoteSnippet>,
}

/// One entry of the remote document. `output` and `tag` are optional in the
/// upstream data and serialize back as nulls when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteSnippet {
    pub command: String,
    pub description: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub tag: Option<Vec<String>>,
}

/// Fetches the remote snippet bundle on each call. A malformed upstream
/// document is reported as `ErrorKind::InvalidData`; any transport-level
/// failure maps to other error kinds.
#[async_trait]
pub trait SnippetSource {
    async fn fetch_snippets(&self) -> IoResult<SnippetBundle>;
}
