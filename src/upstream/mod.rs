pub mod http_snippet_source;
pub mod mock_snippet_source;
pub mod snippet_source;
