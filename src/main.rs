#![recursion_limit = "256"]

mod config;
mod routes;

use config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "ceo-dashboard failed to start");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    // `.env` is optional; real environment variables win.
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = Config::from_env()?;
    let options = routes::leptos_options().map_err(ServerError::Leptos)?;
    tracing::info!(site_root = %options.site_root, output = %options.output_name, "leptos options loaded");

    let app = routes::app(options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "ceo-dashboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
