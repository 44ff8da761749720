//! Unusual Whales MCP Server
//!
//! A Model Context Protocol (MCP) server exposing the Unusual Whales
//! financial data API as tools.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use unusualwhales_mcp::api::{ApiClient, Catalog};
use unusualwhales_mcp::config::Config;
use unusualwhales_mcp::mcp::tools::{describe, ToolHandler};
use unusualwhales_mcp::mcp::{http, McpServer};

/// Unusual Whales MCP Server
#[derive(Parser)]
#[command(name = "unusualwhales-mcp-server")]
#[command(author, version, about = "Unusual Whales MCP Server - market data tools over the Model Context Protocol")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over HTTP (POST /mcp) instead of stdio
    Http {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to bind
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Browser origin allowed besides loopback (repeatable)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Print the tool descriptors as JSON and exit
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set
    let _ = dotenvy::dotenv();

    // Initialize logging; stdout is reserved for protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(Catalog::builtin().context("endpoint catalog is inconsistent")?);

    match cli.command {
        Some(Commands::Tools) => {
            let tools = describe(&catalog);
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
        Some(Commands::Http {
            host,
            port,
            allow_origins,
        }) => {
            let server = build_server(catalog)?;
            http::serve(Arc::new(server), SocketAddr::new(host, port), allow_origins)
                .await
                .context("HTTP transport failed")?;
        }
        None => {
            let server = build_server(catalog)?;
            server.run_stdio().await.context("stdio transport failed")?;
        }
    }

    Ok(())
}

fn build_server(catalog: Arc<Catalog>) -> anyhow::Result<McpServer> {
    let config = Config::new().context("failed to load configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        tools = catalog.len(),
        "starting Unusual Whales MCP server"
    );

    let client = Arc::new(ApiClient::new(&config).context("failed to build HTTP client")?);
    Ok(McpServer::new(ToolHandler::new(catalog, client)))
}
