use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dashboard_api::config::{self, AppConfig};
use dashboard_api::database::manager::redact_url;
use dashboard_api::{app, AppState};

/// Personal productivity dashboard API server
#[derive(Debug, Parser)]
#[command(name = "dashboard-api", version, about)]
struct Args {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SQLite connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

impl Args {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dashboard_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.apply(config::config().clone());
    tracing::info!(
        "Starting dashboard API in {:?} mode (database: {})",
        config.environment,
        redact_url(&config.database.url)
    );

    let bind_addr = config.bind_addr();
    let state = AppState::from_config(config).await?;
    let db = state.db.clone();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
