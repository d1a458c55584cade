use rocket::local::blocking::Client;
use snippet_server::server::{ServerConfig, ServerNode};
use url::Url;

pub fn get_server_config_mock(port: u16) -> ServerConfig {
    ServerConfig {
        port,
        gist_url: Url::parse("http://127.0.0.1:9/commands.json").unwrap(),
        fetch_timeout_secs: 2,
        use_mock_source: true,
    }
}

/// Points the gist proxy at a port nothing listens on, so the outbound
/// fetch fails fast with a connection error.
pub fn get_server_config_unreachable(port: u16) -> ServerConfig {
    ServerConfig {
        use_mock_source: false,
        ..get_server_config_mock(port)
    }
}

pub fn get_server_config_with_url(port: u16, gist_url: &str) -> ServerConfig {
    ServerConfig {
        gist_url: Url::parse(gist_url).unwrap(),
        use_mock_source: false,
        ..get_server_config_mock(port)
    }
}

pub fn launch_server_node(config: ServerConfig) -> Client {
    let node = ServerNode::new(config);
    Client::tracked(node.build()).expect("valid rocket instance")
}
