use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use searchlight::{
    domain::{Description, SearchParams},
    services::document_loader::load_document,
};

const DEFAULT_PORT: &str = "8000";

fn cli() -> Command {
    Command::new("searchlight")
        .about("Resolve OpenSearch description templates into search URLs")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Run the search redirect server")
                .arg(
                    Arg::new("services")
                        .short('s')
                        .long("services")
                        .value_name("SERVICES")
                        .help("Path to a YAML file listing search services"),
                )
                .arg(
                    Arg::new("default_alias")
                        .short('a')
                        .long("default_alias")
                        .value_name("DEFAULT_ALIAS")
                        .help("Alias to use when a query doesn't start with one"),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .value_name("PORT")
                        .default_value(DEFAULT_PORT),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print the search URL for a description document")
                .arg(
                    Arg::new("osdd")
                        .short('o')
                        .long("osdd")
                        .value_name("OSDD")
                        .required(true)
                        .help("Path or http(s) URL of the description document"),
                )
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("CONTENT_TYPE")
                        .default_value("*/*"),
                )
                .arg(
                    Arg::new("params")
                        .value_name("NAME=VALUE")
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .help("Search parameters, e.g. searchTerms=ice"),
                ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("searchlight=info,tower_http=info")),
        )
        .init();

    match cli().get_matches().subcommand() {
        Some(("serve", matches)) => serve(matches).await,
        Some(("resolve", matches)) => resolve(matches).await,
        _ => unreachable!("subcommand_required"),
    }
}

async fn serve(matches: &ArgMatches) -> Result<()> {
    let services_file = matches.get_one::<String>("services").map(String::as_str);
    let default_alias = matches
        .get_one::<String>("default_alias")
        .map(String::as_str)
        .unwrap_or(searchlight::DEFAULT_ALIAS);
    let port: u16 = matches
        .get_one::<String>("port")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PORT)
        .parse()
        .context("Invalid port")?;

    let state = searchlight::build_state(services_file, default_alias).await?;
    let app = searchlight::create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn resolve(matches: &ArgMatches) -> Result<()> {
    let source = matches
        .get_one::<String>("osdd")
        .context("--osdd is required")?;
    let content_type = matches
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or("*/*");

    let mut params = SearchParams::new();
    for pair in matches.get_many::<String>("params").into_iter().flatten() {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Expected NAME=VALUE, got '{}'", pair);
        };
        params.insert(name, value);
    }

    let description = Description::new(load_document(source).await?)?;
    println!("{}", description.resolve(&params, content_type)?);
    Ok(())
}
