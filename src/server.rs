use log::{debug, info};
use rocket::http::{ContentType, Status};
use rocket::response::status::Custom;
use rocket::{delete, get, patch, post, put, routes, Build, Rocket, State};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::store::{CommandRecord, SnippetStore, DEMO_SNIPPET_ID};
use crate::upstream::http_snippet_source::HttpSnippetSource;
use crate::upstream::mock_snippet_source::MockSnippetSource;
use crate::upstream::snippet_source::SnippetSource;

type JsonBody = (ContentType, String);

#[get("/")]
fn health_check() -> &'static str {
    "Healthy\n"
}

fn render_command_list(store: &SnippetStore) -> Result<JsonBody, Custom<String>> {
    let records = store.list();
    serde_json::to_string(&records)
        .map(|body| (ContentType::JSON, body))
        .map_err(|e| Custom(Status::InternalServerError, e.to_string()))
}

#[get("/commands")]
fn list_commands(store: &State<Arc<SnippetStore>>) -> Result<JsonBody, Custom<String>> {
    render_command_list(store)
}

// The original service answered every verb other than POST with the list,
// so the common remaining verbs map to the same handler.
#[put("/commands")]
fn list_commands_put(store: &State<Arc<SnippetStore>>) -> Result<JsonBody, Custom<String>> {
    render_command_list(store)
}

#[delete("/commands")]
fn list_commands_delete(store: &State<Arc<SnippetStore>>) -> Result<JsonBody, Custom<String>> {
    render_command_list(store)
}

#[patch("/commands")]
fn list_commands_patch(store: &State<Arc<SnippetStore>>) -> Result<JsonBody, Custom<String>> {
    render_command_list(store)
}

#[post("/commands", data = "<body>")]
fn create_command(
    content_type: Option<&ContentType>,
    body: &str,
    store: &State<Arc<SnippetStore>>,
) -> Result<Status, Custom<String>> {
    match content_type {
        Some(ct) if *ct == ContentType::JSON => {}
        other => {
            let got = other.map(|ct| ct.to_string()).unwrap_or_default();
            return Err(Custom(
                Status::UnsupportedMediaType,
                format!(
                    "Content should be of type 'application/json', but got '{}'",
                    got
                ),
            ));
        }
    }
    let record: CommandRecord =
        serde_json::from_str(body).map_err(|e| Custom(Status::BadRequest, e.to_string()))?;
    let id = store.insert(record);
    debug!("Stored new command snippet under id {}", id);
    Ok(Status::Created)
}

// The id segment is accepted but the lookup stays pinned to the demo
// record, preserving the established behavior of this endpoint.
#[get("/commands/<id>")]
fn command_by_id(
    id: &str,
    store: &State<Arc<SnippetStore>>,
) -> Result<JsonBody, Custom<String>> {
    debug!("Lookup requested for '{}', serving '{}'", id, DEMO_SNIPPET_ID);
    let record = store.get(DEMO_SNIPPET_ID).ok_or_else(|| {
        Custom(
            Status::NotFound,
            format!("no record under '{}'", DEMO_SNIPPET_ID),
        )
    })?;
    serde_json::to_string(&record)
        .map(|body| (ContentType::JSON, body))
        .map_err(|e| Custom(Status::InternalServerError, e.to_string()))
}

#[get("/commands/<path..>", rank = 2)]
fn command_path_too_deep(path: PathBuf) -> Custom<String> {
    Custom(
        Status::BadRequest,
        format!("unexpected path depth: /commands/{}", path.display()),
    )
}

async fn serve_gists(
    source: &Arc<dyn SnippetSource + Send + Sync>,
) -> Result<JsonBody, Custom<String>> {
    let bundle = source.fetch_snippets().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            Custom(
                Status::BadGateway,
                format!("malformed upstream snippet document: {}", e),
            )
        } else {
            info!("{}", e.to_string());
            Custom(Status::InternalServerError, String::new())
        }
    })?;
    serde_json::to_string(&bundle)
        .map(|body| (ContentType::JSON, body))
        .map_err(|e| Custom(Status::InternalServerError, e.to_string()))
}

#[get("/gists")]
async fn gists(
    source: &State<Arc<dyn SnippetSource + Send + Sync>>,
) -> Result<JsonBody, Custom<String>> {
    serve_gists(source).await
}

#[get("/gists/<path..>")]
async fn gists_subpath(
    path: PathBuf,
    source: &State<Arc<dyn SnippetSource + Send + Sync>>,
) -> Result<JsonBody, Custom<String>> {
    debug!("Gist sub-path '{}' ignored", path.display());
    serve_gists(source).await
}

pub struct ServerNode {
    store: Arc<SnippetStore>,
    source: Arc<dyn SnippetSource + Send + Sync>,
    config: ServerConfig,
}

pub struct ServerConfig {
    pub port: u16,
    pub gist_url: Url,
    pub fetch_timeout_secs: u64,
    pub use_mock_source: bool,
}

impl ServerNode {
    pub fn new(config: ServerConfig) -> Self {
        let source: Arc<dyn SnippetSource + Send + Sync> = if config.use_mock_source {
            info!("Using mock snippet source.");
            Arc::new(MockSnippetSource::new())
        } else {
            info!("Using HTTP snippet source at '{}'.", config.gist_url);
            Arc::new(HttpSnippetSource::new(
                config.gist_url.clone(),
                Duration::from_secs(config.fetch_timeout_secs),
            ))
        };
        let store = Arc::new(SnippetStore::with_demo_records());
        ServerNode {
            store,
            source,
            config,
        }
    }

    pub fn build(&self) -> Rocket<Build> {
        rocket::build()
            .configure(rocket::Config::figment().merge(("port", self.config.port)))
            .manage(self.store.clone())
            .manage(self.source.clone())
            .mount(
                "/",
                routes![
                    health_check,
                    list_commands,
                    list_commands_put,
                    list_commands_delete,
                    list_commands_patch,
                    create_command,
                    command_by_id,
                    command_path_too_deep,
                    gists,
                    gists_subpath,
                ],
            )
    }
}
