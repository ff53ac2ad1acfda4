//! CLI entry point for the Trellis graph API server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use trellis_api::config::{load_api_config, load_graph_config};
use trellis_api::routes::{self, AppState};
use trellis_graph::{schema, GraphClient};

#[derive(Parser)]
#[command(name = "trellis-api")]
#[command(about = "HTTP API over a Neo4j property graph")]
struct Cli {
    /// Override the listen address from the config.
    #[arg(short, long)]
    listen: Option<String>,

    /// Skip the destructive reset-and-reseed at startup.
    #[arg(long)]
    skip_bootstrap: bool,

    /// Config file prefix (default: trellis).
    #[arg(short, long, default_value = "trellis")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let api_config = load_api_config(&cli.config)?;
    let graph_config = load_graph_config(&cli.config);

    let graph = GraphClient::connect(&graph_config).await?;

    if api_config.bootstrap.enabled && !cli.skip_bootstrap {
        let script = std::fs::read_to_string(&api_config.bootstrap.file)?;
        schema::reset_database(&graph, &script).await?;
        tracing::info!(file = %api_config.bootstrap.file, "database reseeded");
    }

    // Path validation depends on the discovered sets; discovery must
    // complete before the listener binds.
    let registry = schema::discover_types(&graph).await?;

    let state = AppState {
        graph,
        registry: Arc::new(registry),
    };

    let listen = cli.listen.unwrap_or_else(|| api_config.listen.clone());
    routes::serve(state, &listen).await?;

    Ok(())
}
