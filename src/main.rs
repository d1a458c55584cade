use clap::{App, Arg};
use snippet_server::server::{ServerConfig, ServerNode};
use url::Url;

const DEFAULT_GIST_URL: &str =
    "https://raw.githubusercontent.com/Piotr1215/pet-snippets/master/commands.json";

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(fern::log_file("output.log")?)
        .apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let matches = App::new("snippet-server")
        .version("1.0")
        .about("An in-memory command snippet service with a gist proxy")
        .arg(
            Arg::with_name("port")
                .long("port")
                .takes_value(true)
                .default_value("8080")
                .help("TCP port for the HTTP server"),
        )
        .arg(
            Arg::with_name("gist_url")
                .long("gist-url")
                .takes_value(true)
                .default_value(DEFAULT_GIST_URL)
                .help("Upstream URL for the gist proxy"),
        )
        .arg(
            Arg::with_name("fetch_timeout")
                .long("fetch-timeout")
                .takes_value(true)
                .default_value("10")
                .help("Outbound fetch timeout in seconds"),
        )
        .arg(
            Arg::with_name("use_mock_source")
                .long("use-mock-source")
                .help("Serve canned snippets instead of fetching the upstream gist"),
        )
        .get_matches();
    let _ = setup_logger();
    let port = matches.value_of("port").unwrap().parse::<u16>().unwrap();
    let gist_url = Url::parse(matches.value_of("gist_url").unwrap()).unwrap();
    let fetch_timeout_secs = matches
        .value_of("fetch_timeout")
        .unwrap()
        .parse::<u64>()
        .unwrap();
    let use_mock_source = matches.is_present("use_mock_source");
    let config = ServerConfig {
        port,
        gist_url,
        fetch_timeout_secs,
        use_mock_source,
    };
    let server_node = ServerNode::new(config);
    println!("go to: http://localhost:{}", port);
    server_node.build().launch().await?;
    Ok(())
}
