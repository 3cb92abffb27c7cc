//! CLI entry point for the ProjectDesk GraphQL server.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use projectdesk_core::config::StoreBackend;
use projectdesk_graphql::build_schema;
use projectdesk_server::config::AppConfig;
use projectdesk_server::{connect_stores, routes};
use projectdesk_store::{MemoryStore, Stores};

#[derive(Parser)]
#[command(name = "projectdesk-server", version)]
#[command(about = "GraphQL API for clients and their projects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: projectdesk).
    #[arg(short, long, default_value = "projectdesk", global = true)]
    config: String,

    /// Override the listen port.
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Override the store backend: memory, neo4j.
    #[arg(long, global = true)]
    backend: Option<StoreBackend>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the GraphQL endpoint (default).
    Serve,
    /// Print the schema SDL and exit.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Schema => {
            let schema = build_schema(Stores::from_backend(MemoryStore::new()));
            println!("{}", schema.sdl());
        }
        Command::Serve => {
            let config = AppConfig::load(&cli.config)?.with_overrides(cli.port, cli.backend);
            serve(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let stores = connect_stores(&config).await?;
    let schema = build_schema(stores);
    let app = routes::router(schema, config.server.graphiql);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        backend = ?config.store.backend,
        graphiql = config.server.graphiql,
        "Listening on {}",
        routes::GRAPHQL_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
