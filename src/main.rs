use anyhow::Context;
use clap::{Parser, Subcommand};
use path_client::api::path_service::Client;
use path_client::api::{LonLat, parse_lon_lat};
use path_client::config::{Config, OPTIONAL_VARIABLES};

#[derive(Parser)]
#[command(about = "Talks to the path service backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request a path between two points
    GetPath {
        /// Start point as LON,LAT
        #[arg(long, value_parser = lon_lat, allow_hyphen_values = true)]
        start: LonLat,

        /// End point as LON,LAT
        #[arg(long, value_parser = lon_lat, allow_hyphen_values = true)]
        end: LonLat,

        /// Parse the answer as a GeoJSON line string collection
        #[arg(long)]
        typed: bool,
    },
    /// Delete every node in the graph database
    TruncateDb,
    /// Load the graph database from a cypherl file on the backend host
    LoadGraph {
        #[arg(long)]
        path: Option<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::GetPath { .. } => "get-path",
            Command::TruncateDb => "truncate-db",
            Command::LoadGraph { .. } => "load-graph",
        }
    }
}

fn lon_lat(s: &str) -> Result<LonLat, String> {
    parse_lon_lat(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()).await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::env().with_context(|| {
        format!(
            "config: check the environment variables ({})",
            OPTIONAL_VARIABLES.join(", ")
        )
    })?;

    config.log();

    let client = Client::new(&config.path_service_addr)?;
    let name = cli.command.name();

    execute(&client, cli.command)
        .await
        .with_context(|| format!("{name} against {} failed", config.path_service_addr))
}

async fn execute(client: &Client, command: Command) -> anyhow::Result<()> {
    match command {
        Command::GetPath { start, end, typed: false } => {
            let path = client.get_path(start, end).await?;
            println!("{}", serde_json::to_string_pretty(&path)?);
        }
        Command::GetPath { start, end, typed: true } => {
            match client.get_path_collection(start, end).await? {
                Some(path) => {
                    for coord in path.points() {
                        println!("{:.6},{:.6}", coord.lon, coord.lat);
                    }
                }
                None => println!("no path found"),
            }
        }
        Command::TruncateDb => {
            let status = client.truncate_database().await?;
            println!("{}: {}", status.status, status.message);
        }
        Command::LoadGraph { path } => {
            let status = client.load_graph_database(path.as_deref()).await?;
            println!("{}: {}", status.status, status.message);
        }
    }

    Ok(())
}
